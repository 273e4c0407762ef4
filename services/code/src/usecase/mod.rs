pub mod code;
pub mod generator;
