pub mod types;
pub mod validations;
