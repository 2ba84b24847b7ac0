//! Ingestion of extracted audit metrics into normalized metric sets.
//!
//! Upstream extraction tools emit one JSON document per audit with optional
//! per-area sections. Absent sections and fields are filled with the
//! documented benchmark defaults before classification, so the engine always
//! sees a complete picture.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{AreaKind, IssueEntry, MetricSet, OrganicSignals};
use crate::error::{Result, SearchdeckError};
use crate::fs::FileSystem;

/// Raw audit export as written by the extraction tools. Every section is
/// optional; [`RawAuditData::normalize`] substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAuditData {
    /// Organic channel share and position distribution.
    pub organic_traffic: Option<RawOrganicTraffic>,
    /// Competitive rating benchmark.
    pub competitive: Option<RawRatingGap>,
    /// Engagement trend.
    pub engagement: Option<RawEngagement>,
    /// Crawl health export.
    pub site_health: Option<RawSiteHealth>,
    /// Title and meta description issue counts.
    pub meta_tags: Option<RawIssueList>,
    /// Untargeted competitor keywords.
    pub keyword_gap: Option<RawKeywordGap>,
    /// Intent mix of the ranking portfolio.
    pub keyword_intent: Option<RawKeywordIntent>,
    /// Indexability and performance faults.
    pub technical_seo: Option<RawTechnicalSeo>,
    /// Domain rating benchmark.
    pub domain_authority: Option<RawRatingGap>,
}

/// Organic traffic section of a raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrganicTraffic {
    /// Organic share of total sessions, 0-100.
    pub organic_share_pct: Option<f64>,
    /// Year-over-year traffic change in percent.
    pub yoy_change_pct: Option<f64>,
    /// Keyword position distribution, percentages summing to roughly 100.
    pub position_buckets: Option<PositionBuckets>,
}

/// Share of tracked keywords per ranking bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionBuckets {
    /// Positions 1-3.
    pub top_three: f64,
    /// Positions 4-10.
    pub top_ten: f64,
    /// Positions 11-20.
    pub page_two: f64,
    /// Positions 21 and beyond.
    pub beyond: f64,
}

impl Default for PositionBuckets {
    fn default() -> Self {
        Self {
            top_three: 15.0,
            top_ten: 25.0,
            page_two: 30.0,
            beyond: 30.0,
        }
    }
}

/// Rating-versus-competitors section, used for both the competitive and
/// domain-authority areas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRatingGap {
    /// The brand's rating.
    pub brand_rating: Option<f64>,
    /// Average rating across the competitive set.
    pub competitor_avg_rating: Option<f64>,
}

/// Engagement section of a raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEngagement {
    /// Engagement rate decline versus the prior period, in points.
    pub decline_pct: Option<f64>,
}

/// Crawl health section of a raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSiteHealth {
    /// Crawl health score, 0-100.
    pub health_score: Option<u8>,
    /// Detected crawl issues.
    pub issues: Option<Vec<IssueEntry>>,
}

/// A bare list of named issue counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIssueList {
    /// Detected issues.
    pub issues: Option<Vec<IssueEntry>>,
}

/// Keyword gap section of a raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawKeywordGap {
    /// Keywords competitors rank for that the brand does not target.
    pub missing_keywords: Option<u64>,
    /// Combined monthly search volume of the gap keywords.
    pub total_gap_volume: Option<u64>,
}

/// Intent mix section of a raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawKeywordIntent {
    /// Share of informational-intent keywords, 0-100.
    pub informational_pct: Option<f64>,
}

/// Technical SEO section of a raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTechnicalSeo {
    /// Share of pages affected by indexability or performance faults.
    pub affected_percentage: Option<f64>,
    /// Detected technical issues.
    pub issues: Option<Vec<IssueEntry>>,
}

/// Informational share above this benchmark counts as portfolio skew.
const BALANCED_INFORMATIONAL_PCT: f64 = 50.0;

impl RawAuditData {
    /// Normalize into complete metric sets for all nine canonical areas.
    ///
    /// Defaults reflect the benchmark audit profile: a mid-market site with
    /// moderate technical debt, a competitive rating gap, and a keyword
    /// portfolio skewed toward informational intent.
    pub fn normalize(&self) -> BTreeMap<AreaKind, MetricSet> {
        let mut metrics = BTreeMap::new();

        let organic = self.organic_traffic.clone().unwrap_or_default();
        let buckets = organic.position_buckets.unwrap_or_default();
        metrics.insert(
            AreaKind::OrganicTraffic,
            MetricSet {
                organic: Some(OrganicSignals {
                    organic_share_pct: organic.organic_share_pct.unwrap_or(45.0),
                    yoy_change_pct: organic.yoy_change_pct,
                    page_two_plus_pct: buckets.page_two + buckets.beyond,
                }),
                ..MetricSet::default()
            },
        );

        metrics.insert(
            AreaKind::Competitive,
            rating_gap_metrics(self.competitive.clone().unwrap_or_default()),
        );

        let engagement = self.engagement.clone().unwrap_or_default();
        metrics.insert(
            AreaKind::Engagement,
            MetricSet {
                affected_percentage: Some(engagement.decline_pct.unwrap_or(6.5)),
                ..MetricSet::default()
            },
        );

        let site_health = self.site_health.clone().unwrap_or_default();
        let issues = sorted_issues(site_health.issues.unwrap_or_else(default_crawl_issues));
        metrics.insert(
            AreaKind::SiteHealth,
            MetricSet {
                health_score: Some(site_health.health_score.unwrap_or(75)),
                issues,
                ..MetricSet::default()
            },
        );

        let meta = self.meta_tags.clone().unwrap_or_default();
        let issues = sorted_issues(meta.issues.unwrap_or_else(default_meta_issues));
        metrics.insert(
            AreaKind::MetaTags,
            MetricSet {
                issue_count: Some(issues.iter().map(|issue| issue.count).sum()),
                issues,
                ..MetricSet::default()
            },
        );

        let gap = self.keyword_gap.clone().unwrap_or_default();
        metrics.insert(
            AreaKind::KeywordGap,
            MetricSet {
                issue_count: Some(gap.missing_keywords.unwrap_or(4500)),
                ..MetricSet::default()
            },
        );

        let intent = self.keyword_intent.clone().unwrap_or_default();
        let informational = intent.informational_pct.unwrap_or(72.0);
        metrics.insert(
            AreaKind::KeywordIntent,
            MetricSet {
                affected_percentage: Some(
                    (informational - BALANCED_INFORMATIONAL_PCT).max(0.0),
                ),
                ..MetricSet::default()
            },
        );

        let technical = self.technical_seo.clone().unwrap_or_default();
        let issues = sorted_issues(technical.issues.unwrap_or_else(default_technical_issues));
        metrics.insert(
            AreaKind::TechnicalSeo,
            MetricSet {
                affected_percentage: Some(technical.affected_percentage.unwrap_or(12.0)),
                issues,
                ..MetricSet::default()
            },
        );

        metrics.insert(
            AreaKind::DomainAuthority,
            rating_gap_metrics(self.domain_authority.clone().unwrap_or_default()),
        );

        metrics
    }
}

fn rating_gap_metrics(raw: RawRatingGap) -> MetricSet {
    let brand = raw.brand_rating.unwrap_or(45.0);
    let competitors = raw.competitor_avg_rating.unwrap_or(60.0);
    MetricSet {
        affected_percentage: Some((competitors - brand).max(0.0)),
        ..MetricSet::default()
    }
}

fn sorted_issues(mut issues: Vec<IssueEntry>) -> Vec<IssueEntry> {
    issues.sort_by(|a, b| b.count.cmp(&a.count));
    issues
}

fn default_crawl_issues() -> Vec<IssueEntry> {
    vec![
        issue("Internal links are broken", 350),
        issue("Pages returned 4XX status code", 180),
        issue("Hreflang conflicts within page source code", 95),
    ]
}

fn default_meta_issues() -> Vec<IssueEntry> {
    vec![
        issue("Duplicate meta descriptions", 350),
        issue("Missing meta descriptions", 120),
        issue("Title tags too long", 180),
        issue("Duplicate title tags", 220),
    ]
}

fn default_technical_issues() -> Vec<IssueEntry> {
    vec![
        issue("Low text-html ratio", 410),
        issue("Uncached JavaScript and CSS files", 230),
        issue("Temporary redirect chains", 95),
    ]
}

fn issue(name: &str, count: u64) -> IssueEntry {
    IssueEntry {
        name: name.to_string(),
        count,
    }
}

/// Load the first JSON audit export found in a data directory.
pub fn load_audit_data<F: FileSystem>(fs: &F, dir: &Path) -> Result<RawAuditData> {
    let files = fs.list_files(dir)?;
    let export = files
        .iter()
        .find(|path| path.extension().is_some_and(|ext| ext == "json"))
        .ok_or_else(|| {
            SearchdeckError::Other(format!("no JSON audit export found in {}", dir.display()))
        })?;
    let contents = fs.read_to_string(export)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Benchmark audit fixture: a fully-populated export carrying the documented
/// default values for every section, suitable as a starting template.
pub fn sample() -> RawAuditData {
    RawAuditData {
        organic_traffic: Some(RawOrganicTraffic {
            organic_share_pct: Some(45.0),
            yoy_change_pct: None,
            position_buckets: Some(PositionBuckets::default()),
        }),
        competitive: Some(RawRatingGap {
            brand_rating: Some(45.0),
            competitor_avg_rating: Some(60.0),
        }),
        engagement: Some(RawEngagement {
            decline_pct: Some(6.5),
        }),
        site_health: Some(RawSiteHealth {
            health_score: Some(75),
            issues: Some(default_crawl_issues()),
        }),
        meta_tags: Some(RawIssueList {
            issues: Some(default_meta_issues()),
        }),
        keyword_gap: Some(RawKeywordGap {
            missing_keywords: Some(4500),
            total_gap_volume: Some(85000),
        }),
        keyword_intent: Some(RawKeywordIntent {
            informational_pct: Some(72.0),
        }),
        technical_seo: Some(RawTechnicalSeo {
            affected_percentage: Some(12.0),
            issues: Some(default_technical_issues()),
        }),
        domain_authority: Some(RawRatingGap {
            brand_rating: Some(45.0),
            competitor_avg_rating: Some(60.0),
        }),
    }
}
