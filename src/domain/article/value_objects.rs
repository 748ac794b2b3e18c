use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercases and strips separators so that `"Hong Kong"`, `"hong_kong"` and
/// `"hongkong"` compare equal.
fn fold_label(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-' && *c != '/')
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Country {
    #[serde(rename = "Australia")]
    Australia,
    #[serde(rename = "Japan")]
    Japan,
    #[serde(rename = "Hong Kong")]
    HongKong,
    #[serde(rename = "Singapore")]
    Singapore,
    #[serde(rename = "Malaysia")]
    Malaysia,
    #[serde(rename = "Indonesia")]
    Indonesia,
    #[serde(rename = "Thailand")]
    Thailand,
    #[serde(rename = "Philippines")]
    Philippines,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Australia,
        Country::Japan,
        Country::HongKong,
        Country::Singapore,
        Country::Malaysia,
        Country::Indonesia,
        Country::Thailand,
        Country::Philippines,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Australia => "Australia",
            Country::Japan => "Japan",
            Country::HongKong => "Hong Kong",
            Country::Singapore => "Singapore",
            Country::Malaysia => "Malaysia",
            Country::Indonesia => "Indonesia",
            Country::Thailand => "Thailand",
            Country::Philippines => "Philippines",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_label(s);
        Country::ALL
            .into_iter()
            .find(|country| fold_label(country.as_str()) == folded)
            .ok_or_else(|| DomainError::Validation(format!("unknown country: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Wealth Management")]
    WealthManagement,
    #[serde(rename = "Private Banking")]
    PrivateBanking,
    #[serde(rename = "Global Markets")]
    GlobalMarkets,
    #[serde(rename = "Capital Markets")]
    CapitalMarkets,
    #[serde(rename = "Risk Management")]
    RiskManagement,
    #[serde(rename = "AML/KYC")]
    AmlKyc,
    #[serde(rename = "Core Banking")]
    CoreBanking,
    #[serde(rename = "Transaction Banking")]
    TransactionBanking,
    #[serde(rename = "Cash Management")]
    CashManagement,
    #[serde(rename = "Payments")]
    Payments,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::WealthManagement,
        Category::PrivateBanking,
        Category::GlobalMarkets,
        Category::CapitalMarkets,
        Category::RiskManagement,
        Category::AmlKyc,
        Category::CoreBanking,
        Category::TransactionBanking,
        Category::CashManagement,
        Category::Payments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WealthManagement => "Wealth Management",
            Category::PrivateBanking => "Private Banking",
            Category::GlobalMarkets => "Global Markets",
            Category::CapitalMarkets => "Capital Markets",
            Category::RiskManagement => "Risk Management",
            Category::AmlKyc => "AML/KYC",
            Category::CoreBanking => "Core Banking",
            Category::TransactionBanking => "Transaction Banking",
            Category::CashManagement => "Cash Management",
            Category::Payments => "Payments",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_label(s);
        Category::ALL
            .into_iter()
            .find(|category| fold_label(category.as_str()) == folded)
            .ok_or_else(|| DomainError::Validation(format!("unknown category: {s}")))
    }
}
