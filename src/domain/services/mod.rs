pub mod contracts;
pub mod statistics;
