pub mod catalog;
pub mod category;
pub mod field;
pub mod token;
