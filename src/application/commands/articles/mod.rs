// src/application/commands/articles/mod.rs
mod refresh;
mod service;
mod toggle;
mod views;

pub use service::ArticleCommandService;
