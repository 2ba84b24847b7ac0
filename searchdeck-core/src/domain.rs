//! Domain entities for Searchdeck.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The nine canonical analysis areas of an audit, in the fixed order used
/// for all aggregation tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaKind {
    /// Organic channel share and keyword position performance.
    OrganicTraffic,
    /// Authority and traffic benchmarks against the competitive set.
    Competitive,
    /// Engagement rate trend across reporting periods.
    Engagement,
    /// Crawl health score and crawl-level issue counts.
    SiteHealth,
    /// Title and meta description signal quality.
    MetaTags,
    /// Keywords competitors rank for that the brand does not target.
    KeywordGap,
    /// Intent mix of the ranking keyword portfolio.
    KeywordIntent,
    /// Indexability, performance, and crawlability faults.
    TechnicalSeo,
    /// Domain rating versus the competitive average.
    DomainAuthority,
}

impl AreaKind {
    /// Canonical area order. Aggregation recombines results in this order
    /// regardless of evaluation order.
    pub const CANONICAL: [AreaKind; 9] = [
        AreaKind::OrganicTraffic,
        AreaKind::Competitive,
        AreaKind::Engagement,
        AreaKind::SiteHealth,
        AreaKind::MetaTags,
        AreaKind::KeywordGap,
        AreaKind::KeywordIntent,
        AreaKind::TechnicalSeo,
        AreaKind::DomainAuthority,
    ];

    /// Stable kebab-case identifier for the area.
    pub fn as_str(self) -> &'static str {
        match self {
            AreaKind::OrganicTraffic => "organic-traffic",
            AreaKind::Competitive => "competitive",
            AreaKind::Engagement => "engagement",
            AreaKind::SiteHealth => "site-health",
            AreaKind::MetaTags => "meta-tags",
            AreaKind::KeywordGap => "keyword-gap",
            AreaKind::KeywordIntent => "keyword-intent",
            AreaKind::TechnicalSeo => "technical-seo",
            AreaKind::DomainAuthority => "domain-authority",
        }
    }

    /// Human-readable title used in rendered reports.
    pub fn title(self) -> &'static str {
        match self {
            AreaKind::OrganicTraffic => "Organic Traffic",
            AreaKind::Competitive => "Competitive Benchmarking",
            AreaKind::Engagement => "User Engagement",
            AreaKind::SiteHealth => "Site Health",
            AreaKind::MetaTags => "Meta Tags & On-Page Signals",
            AreaKind::KeywordGap => "Keyword Gap",
            AreaKind::KeywordIntent => "Keyword Intent Distribution",
            AreaKind::TechnicalSeo => "Technical SEO",
            AreaKind::DomainAuthority => "Domain Authority",
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency rating for an area or pillar. Declaration order makes `min` the
/// most urgent value, so `Critical < High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Requires immediate remediation.
    #[serde(rename = "C")]
    Critical,
    /// Significant issue constraining growth.
    #[serde(rename = "H")]
    High,
    /// Optimization opportunity.
    #[serde(rename = "M")]
    Medium,
    /// No meaningful constraint detected.
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    /// Single-letter badge used in rendered output.
    pub fn badge(self) -> char {
        match self {
            Priority::Critical => 'C',
            Priority::High => 'H',
            Priority::Medium => 'M',
            Priority::Low => 'L',
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(name)
    }
}

/// One detected problem instance count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEntry {
    /// Issue name as reported by the source tool.
    pub name: String,
    /// Number of affected URLs or instances.
    pub count: u64,
}

/// Organic-traffic composite signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganicSignals {
    /// Organic share of total sessions, 0-100.
    pub organic_share_pct: f64,
    /// Year-over-year traffic change in percent, when the source covers
    /// two comparable periods.
    pub yoy_change_pct: Option<f64>,
    /// Share of tracked keywords ranking beyond page one, 0-100.
    pub page_two_plus_pct: f64,
}

/// Normalized facts for one analysis area.
///
/// The ingestion adapter substitutes documented defaults before these reach
/// the engine; any field still absent is handled by the engine's Medium
/// fallback rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSet {
    /// Health or quality score, 0-100, higher is better.
    pub health_score: Option<u8>,
    /// Share of affected pages or traffic, 0-100, higher is worse.
    pub affected_percentage: Option<f64>,
    /// Raw issue or error count, higher is worse.
    pub issue_count: Option<u64>,
    /// Detected issues, descending by count.
    pub issues: Vec<IssueEntry>,
    /// Composite signals for the organic-traffic area.
    pub organic: Option<OrganicSignals>,
}

/// Website category driving benchmark phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteType {
    /// Online store.
    #[default]
    Ecommerce,
    /// Software-as-a-service product site.
    Saas,
    /// Publisher or editorial site.
    Content,
    /// Local business site.
    Local,
    /// Multi-vendor marketplace.
    Marketplace,
}

/// Immutable per-run configuration for narrative synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditContext {
    /// Client brand name.
    pub brand_name: String,
    /// Month label for the audit, e.g. "August 2026".
    pub audit_month: String,
    /// Website category.
    pub website_type: WebsiteType,
}

impl AuditContext {
    /// Create a context for a brand with the given audit month.
    pub fn new(
        brand_name: impl Into<String>,
        audit_month: impl Into<String>,
        website_type: WebsiteType,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            audit_month: audit_month.into(),
            website_type,
        }
    }
}

/// Classified and narrated result for one analysis area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaResult {
    /// The analysis area.
    pub area: AreaKind,
    /// Urgency rating from the priority engine.
    pub priority: Priority,
    /// Synthesized key message for the area.
    pub key_message: String,
    /// Issue statements, most severe first.
    pub issues: Vec<String>,
    /// Business impact statements parallel to `issues`.
    pub impacts: Vec<String>,
    /// Recommended actions parallel to `issues`.
    pub actions: Vec<String>,
}

/// Aggregated priority and finding lists for one chapter of areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    /// Most urgent priority among the constituent areas.
    pub priority: Priority,
    /// Top issue per constituent area, in area input order.
    pub issues: Vec<String>,
    /// Top impact per constituent area, in area input order.
    pub impacts: Vec<String>,
    /// Top action per constituent area, in area input order.
    pub actions: Vec<String>,
}

/// Top-level pillar of the findings summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    /// Site health and technical SEO.
    Technical,
    /// On-page signals, keyword gaps, and intent mix.
    Content,
    /// Competitive position and domain authority.
    Authority,
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pillar::Technical => "Technical SEO",
            Pillar::Content => "Content SEO",
            Pillar::Authority => "Domain Authority",
        };
        f.write_str(name)
    }
}

/// The single dominant-concern message across all pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedFinding {
    /// Pillar that won the urgency comparison.
    pub pillar: Pillar,
    /// Dominant-concern sentence.
    pub key_message: String,
    /// Subtitle carrying the organic-traffic key message.
    pub subtitle: String,
}

/// Per-pillar executive summary sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    /// Technical pillar summary.
    pub technical: String,
    /// Content pillar summary.
    pub content: String,
    /// Authority pillar summary.
    pub authority: String,
}

/// Static KPI benchmark block surfaced in the rendered report. Not computed
/// by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTargets {
    /// Current click-through rate.
    pub current_ctr: String,
    /// Current average position.
    pub current_avg_position: String,
    /// Current monthly organic sessions.
    pub current_organic_sessions: String,
    /// Target click-through rate uplift.
    pub target_ctr: String,
    /// Target position improvement range.
    pub target_position_improvement: String,
    /// Target traffic improvement.
    pub target_traffic_improvement: String,
    /// Industry benchmark click-through rate.
    pub benchmark_ctr: String,
}

impl Default for KpiTargets {
    fn default() -> Self {
        Self {
            current_ctr: "2.8%".to_string(),
            current_avg_position: "18.5".to_string(),
            current_organic_sessions: "25,000".to_string(),
            target_ctr: "+1%".to_string(),
            target_position_improvement: "10-50%".to_string(),
            target_traffic_improvement: "+15%".to_string(),
            benchmark_ctr: "3-5%".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AreaKind, Priority};

    #[test]
    fn canonical_order_is_stable() {
        assert_eq!(AreaKind::CANONICAL.len(), 9);
        assert_eq!(AreaKind::CANONICAL[0], AreaKind::OrganicTraffic);
        assert_eq!(AreaKind::CANONICAL[8], AreaKind::DomainAuthority);
    }

    #[test]
    fn priority_orders_most_urgent_first() {
        assert!(Priority::Critical < Priority::High);
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        let min = [Priority::Medium, Priority::High, Priority::Low]
            .into_iter()
            .min()
            .unwrap();
        assert_eq!(min, Priority::High);
    }

    #[test]
    fn priority_serializes_as_letter_badge() {
        let json = serde_json::to_string(&Priority::Critical).expect("serialize");
        assert_eq!(json, "\"C\"");
        let parsed: Priority = serde_json::from_str("\"L\"").expect("deserialize");
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn area_kind_round_trips_kebab_case() {
        let json = serde_json::to_string(&AreaKind::TechnicalSeo).expect("serialize");
        assert_eq!(json, "\"technical-seo\"");
    }
}
