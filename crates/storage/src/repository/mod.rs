pub mod employee;
pub mod history;
