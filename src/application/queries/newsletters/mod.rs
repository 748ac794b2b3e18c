mod gallery;
mod reader;
mod service;

pub use reader::OTHER_COUNTRY_GROUP;
pub use service::NewsletterQueryService;
