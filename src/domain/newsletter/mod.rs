pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewNewsletter, Newsletter};
pub use repository::{NewsletterReadRepository, NewsletterWriteRepository};
pub use value_objects::{NewsletterDescription, NewsletterId, NewsletterTitle};
