pub mod employee;
pub mod rotation;
