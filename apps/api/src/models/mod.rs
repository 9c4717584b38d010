pub mod input;
pub mod plan;
