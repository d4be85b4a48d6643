pub mod field;
pub mod logic;
pub mod rules;
pub mod types;
