mod duty;
mod employee;
mod history;

pub use duty::DutyType;
pub use employee::{Employee, TurnState};
pub use history::HistoryRecord;
