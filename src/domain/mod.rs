// src/domain/mod.rs
pub mod analyst;
pub mod analytics;
pub mod article;
pub mod errors;
pub mod newsletter;
pub mod selection;
