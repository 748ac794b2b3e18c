mod engagement;
mod overview;
mod performance;
mod service;

pub use service::AnalyticsQueryService;
