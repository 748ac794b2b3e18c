// src/application/commands/auth/mod.rs
mod bootstrap;
mod service;
mod session;
mod sign_in;

pub use service::AuthService;
