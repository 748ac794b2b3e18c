use std::sync::Arc;

use crate::{application::timeout::StoreDeadline, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) deadline: StoreDeadline,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, deadline: StoreDeadline) -> Self {
        Self {
            read_repo,
            deadline,
        }
    }
}
