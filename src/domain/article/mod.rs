pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleFlagsUpdate, WorkflowState};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, Category, Country};
