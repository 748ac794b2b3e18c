// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, auth::AuthService,
            newsletters::NewsletterCommandService,
        },
        ports::{
            security::{PasswordHasher, SessionTokenGenerator},
            session::SessionStore,
            time::Clock,
        },
        queries::{
            analytics::AnalyticsQueryService, articles::ArticleQueryService,
            newsletters::NewsletterQueryService,
        },
        timeout::StoreDeadline,
    },
    domain::{
        analyst::AnalystRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
        newsletter::{NewsletterReadRepository, NewsletterWriteRepository},
    },
};

/// Store adapters the services are built from.
pub struct Repositories {
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub newsletter_read: Arc<dyn NewsletterReadRepository>,
    pub newsletter_write: Arc<dyn NewsletterWriteRepository>,
    pub analysts: Arc<dyn AnalystRepository>,
}

pub struct SecurityPorts {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_generator: Arc<dyn SessionTokenGenerator>,
    pub session_store: Arc<dyn SessionStore>,
    pub session_ttl: Duration,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    pub analytics: Arc<AnalyticsQueryService>,
    pub auth: Arc<AuthService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        security: SecurityPorts,
        clock: Arc<dyn Clock>,
        deadline: StoreDeadline,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.article_write),
            deadline,
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            deadline,
        ));
        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.newsletter_write),
            Arc::clone(&clock),
            deadline,
        ));
        let newsletter_queries = Arc::new(NewsletterQueryService::new(
            Arc::clone(&repos.newsletter_read),
            Arc::clone(&repos.newsletter_write),
            Arc::clone(&repos.article_read),
            deadline,
        ));
        let analytics = Arc::new(AnalyticsQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.newsletter_read),
            deadline,
        ));
        let auth = Arc::new(AuthService::new(
            repos.analysts,
            security.password_hasher,
            security.token_generator,
            security.session_store,
            clock,
            deadline,
            security.session_ttl,
        ));

        Self {
            article_commands,
            article_queries,
            newsletter_commands,
            newsletter_queries,
            analytics,
            auth,
        }
    }
}
