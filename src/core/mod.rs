pub mod text;
pub mod types;
