// src/presentation/http/controllers/mod.rs
pub mod analytics;
pub mod articles;
pub mod auth;
pub mod newsletters;
pub mod reader;
