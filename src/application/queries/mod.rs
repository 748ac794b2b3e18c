pub mod analytics;
pub mod articles;
pub mod newsletters;
