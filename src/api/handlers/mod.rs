pub mod announcement;
pub mod auth;
pub mod division;
pub mod employee;
pub mod health;
pub mod statistics;
pub mod user;
