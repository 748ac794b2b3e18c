// src/domain/analyst/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Analyst, NewAnalyst};
pub use repository::AnalystRepository;
pub use value_objects::{AnalystId, Email, PasswordHash};
