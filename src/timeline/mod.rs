pub mod budget;
pub mod field;
