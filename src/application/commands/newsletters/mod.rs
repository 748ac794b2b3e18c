// src/application/commands/newsletters/mod.rs
mod publish;
mod service;

pub use service::NewsletterCommandService;
