pub mod employees;
pub mod history;
pub mod rotation;
