// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::timeout::StoreDeadline,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) deadline: StoreDeadline,
}

impl ArticleCommandService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        deadline: StoreDeadline,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            deadline,
        }
    }
}
