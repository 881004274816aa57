use std::cmp::Ordering;

use crate::models::{DutyType, Employee};

/// Rank the active employees for a duty type, fairest-first.
///
/// The order is a strict two-level comparator:
/// 1. `turn_count` ascending — fewer completed turns goes first.
/// 2. `last_turn_date` ascending — longest since last turn goes first,
///    and an employee who has never taken a turn outranks any who has.
///
/// A final `id` tie-break keeps the result deterministic for employees
/// whose state is identical. Inactive employees never appear in the
/// output. Pure function: no clock reads, no side effects.
///
/// Callers treat index 0 as the current duty holder and the remainder as
/// the queue; the ranking itself makes no such distinction.
pub fn rank(employees: &[Employee], duty: DutyType) -> Vec<Employee> {
    let mut ranked: Vec<Employee> = employees.iter().filter(|e| e.is_active).cloned().collect();
    ranked.sort_by(|a, b| compare(a, b, duty));
    ranked
}

fn compare(a: &Employee, b: &Employee, duty: DutyType) -> Ordering {
    let (sa, sb) = (a.turn_state(duty), b.turn_state(duty));

    sa.turn_count
        .cmp(&sb.turn_count)
        .then_with(|| match (sa.last_turn_date, sb.last_turn_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(da), Some(db)) => da.cmp(&db),
        })
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::models::DutyType;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn employee(
        id: i64,
        turn_count: i64,
        last_turn_date: Option<DateTime<Utc>>,
        is_active: bool,
    ) -> Employee {
        Employee {
            id,
            name: format!("Employee {id}"),
            breakfast_last_turn_date: last_turn_date,
            breakfast_turn_count: turn_count,
            // Orders state deliberately differs so tests would catch the
            // comparator reading the wrong duty's columns.
            orders_last_turn_date: Some(ts(999_999)),
            orders_turn_count: 42,
            is_active,
            created_at: ts(0),
        }
    }

    fn ids(ranked: &[Employee]) -> Vec<i64> {
        ranked.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_set_yields_empty_order() {
        assert!(rank(&[], DutyType::Breakfast).is_empty());
    }

    #[test]
    fn test_single_employee_is_singleton() {
        let roster = [employee(1, 3, Some(ts(100)), true)];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![1]);
    }

    #[test]
    fn test_fewer_turns_goes_first() {
        let roster = [
            employee(1, 2, Some(ts(100)), true),
            employee(2, 0, None, true),
            employee(3, 1, Some(ts(50)), true),
        ];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![2, 3, 1]);
    }

    #[test]
    fn test_basic_rotation_after_completion() {
        // A, B, C all fresh; after A completes once, B and C rank ahead.
        let roster = [
            employee(1, 1, Some(ts(100)), true),
            employee(2, 0, None, true),
            employee(3, 0, None, true),
        ];
        let ranked = ids(&rank(&roster, DutyType::Breakfast));
        assert_eq!(ranked[2], 1);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_tie_break_by_oldest_last_turn() {
        let roster = [
            employee(1, 1, Some(ts(200)), true),
            employee(2, 1, Some(ts(100)), true),
        ];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![2, 1]);
    }

    #[test]
    fn test_never_served_outranks_any_timestamp() {
        // Degenerate but legal: equal counts, one with a date, one without.
        let roster = [
            employee(1, 0, None, true),
            employee(2, 0, Some(ts(100)), true),
        ];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![1, 2]);

        let roster = [
            employee(1, 0, Some(ts(100)), true),
            employee(2, 0, None, true),
        ];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![2, 1]);
    }

    #[test]
    fn test_zero_count_never_ranks_after_positive_count() {
        // Fairness invariant: a timestamp can never outweigh the count.
        let roster = [
            employee(1, 1, Some(ts(10)), true),
            employee(2, 0, Some(ts(999)), true),
        ];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![2, 1]);
    }

    #[test]
    fn test_inactive_excluded_regardless_of_state() {
        let roster = [
            employee(1, 5, Some(ts(100)), true),
            employee(2, 0, None, false),
        ];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![1]);
    }

    #[test]
    fn test_duty_types_rank_independently() {
        let mut a = employee(1, 0, None, true);
        a.orders_turn_count = 5;
        a.orders_last_turn_date = Some(ts(500));
        let mut b = employee(2, 3, Some(ts(300)), true);
        b.orders_turn_count = 0;
        b.orders_last_turn_date = None;

        let roster = [a, b];
        assert_eq!(ids(&rank(&roster, DutyType::Breakfast)), vec![1, 2]);
        assert_eq!(ids(&rank(&roster, DutyType::Orders)), vec![2, 1]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let roster = [
            employee(3, 0, None, true),
            employee(1, 0, None, true),
            employee(2, 1, Some(ts(100)), true),
        ];
        let first = ids(&rank(&roster, DutyType::Breakfast));
        let second = ids(&rank(&roster, DutyType::Breakfast));
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 3, 2]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = employee(1, 2, Some(ts(100)), true);
        let b = employee(2, 1, Some(ts(200)), true);
        let c = employee(3, 1, Some(ts(50)), true);

        let forward = ids(&rank(&[a.clone(), b.clone(), c.clone()], DutyType::Breakfast));
        let backward = ids(&rank(&[c, b, a], DutyType::Breakfast));
        assert_eq!(forward, backward);
        assert_eq!(forward, vec![3, 2, 1]);
    }
}
