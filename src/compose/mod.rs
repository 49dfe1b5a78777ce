pub mod layout;
pub mod merge;
