pub mod analytics;
pub mod articles;
pub mod auth;
pub mod newsletters;
pub mod serde_time;

pub use analytics::{
    ContentPerformanceDto, ContentPerformanceQuery, OverviewDto, ReaderEngagementDto, SortKey,
    SortOrder, StatusFilter,
};
pub use articles::{
    ArticleDto, ArticleListDto, ArticleListQuery, DistributionDto, NamedCountDto, SelectionOverviewDto,
    WorkflowStateDto,
};
pub use auth::{Session, SessionDto, SessionEvent, SignInRequest};
pub use newsletters::{
    CountryGroupDto, NewsletterDto, NewsletterMeta, PublishNewsletterRequest, ReaderViewDto,
};
