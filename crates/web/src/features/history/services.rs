use chrono::SecondsFormat;
use sqlx::SqlitePool;
use storage::{
    error::Result,
    models::{DutyType, HistoryRecord},
    repository::history::HistoryRepository,
};

/// Completion history for one duty type, newest first
pub async fn get_history(pool: &SqlitePool, duty: DutyType) -> Result<Vec<HistoryRecord>> {
    let repo = HistoryRepository::new(pool);
    repo.list(duty).await
}

/// Render history records as CSV. Dates are ISO-8601 with millisecond
/// precision; names are quoted with embedded quotes doubled.
pub fn to_csv(records: &[HistoryRecord]) -> String {
    let mut csv = String::from("ID,Employee ID,Employee Name,Date\n");

    for record in records {
        let date = record.date.to_rfc3339_opts(SecondsFormat::Millis, true);
        let name = record.employee_name.replace('"', "\"\"");
        csv.push_str(&format!(
            "{},{},\"{}\",{}\n",
            record.id, record.employee_id, name, date
        ));
    }

    csv
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn record(id: i64, employee_id: i64, name: &str, millis: i64) -> HistoryRecord {
        HistoryRecord {
            id,
            employee_id,
            employee_name: name.to_string(),
            date: Utc.timestamp_millis_opt(millis).unwrap(),
        }
    }

    #[test]
    fn test_empty_history_renders_header_only() {
        assert_eq!(to_csv(&[]), "ID,Employee ID,Employee Name,Date\n");
    }

    #[test]
    fn test_rows_follow_export_format() {
        let records = [
            record(2, 7, "Alice", 1_700_000_000_500),
            record(1, 3, "Bob", 1_600_000_000_000),
        ];

        let csv = to_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Employee ID,Employee Name,Date");
        assert_eq!(lines[1], "2,7,\"Alice\",2023-11-14T22:13:20.500Z");
        assert_eq!(lines[2], "1,3,\"Bob\",2020-09-13T12:26:40.000Z");
    }

    #[test]
    fn test_quotes_in_names_are_doubled() {
        let records = [record(1, 1, "Joe \"Tiny\" Smith", 0)];

        let csv = to_csv(&records);
        assert!(csv.contains("\"Joe \"\"Tiny\"\" Smith\""));
    }
}
