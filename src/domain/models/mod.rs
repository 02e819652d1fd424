pub mod announcement;
pub mod division;
pub mod employee;
pub mod statistics;
pub mod user;
