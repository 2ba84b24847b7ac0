//! Findings aggregation across areas and pillars.

use crate::domain::{
    AreaKind, AreaResult, AuditContext, ExecutiveSummary, MetricSet, Pillar, Priority,
    SectionSummary, UnifiedFinding,
};
use crate::engine::classify;
use crate::narrative::{business_impact, key_message};

/// Number of issue triples carried per area.
const TOP_ISSUES_PER_AREA: usize = 3;

/// Pillar membership in canonical area order.
pub fn pillar_areas(pillar: Pillar) -> &'static [AreaKind] {
    match pillar {
        Pillar::Technical => &[AreaKind::SiteHealth, AreaKind::TechnicalSeo],
        Pillar::Content => &[
            AreaKind::MetaTags,
            AreaKind::KeywordGap,
            AreaKind::KeywordIntent,
        ],
        Pillar::Authority => &[AreaKind::Competitive, AreaKind::DomainAuthority],
    }
}

/// Classify one area and synthesize its narrative payload.
///
/// When the area carries an issue list, the top entries are translated to
/// business-impact triples; otherwise the area's canned triple stands in.
pub fn analyze_area(area: AreaKind, metrics: &MetricSet, context: &AuditContext) -> AreaResult {
    let priority = classify(area, metrics);
    let message = key_message(area, metrics, priority, context);

    let mut issues = Vec::new();
    let mut impacts = Vec::new();
    let mut actions = Vec::new();

    if metrics.issues.is_empty() {
        let (issue, impact, action) = canned_triple(area);
        issues.push(issue.to_string());
        impacts.push(impact.to_string());
        actions.push(action.to_string());
    } else {
        for entry in metrics.issues.iter().take(TOP_ISSUES_PER_AREA) {
            let triple = business_impact(&entry.name, entry.count);
            issues.push(triple.issue);
            impacts.push(triple.impact);
            actions.push(triple.action);
        }
    }

    AreaResult {
        area,
        priority,
        key_message: message,
        issues,
        impacts,
        actions,
    }
}

/// Aggregate one chapter of area results into a section summary.
///
/// The summary priority is the most urgent priority among the constituents;
/// ties resolve to the first area in input order. The lists take each
/// area's first issue/impact/action in input order.
pub fn aggregate_section(results: &[AreaResult]) -> SectionSummary {
    let priority = results
        .iter()
        .map(|result| result.priority)
        .min()
        .unwrap_or(Priority::Medium);

    let mut issues = Vec::new();
    let mut impacts = Vec::new();
    let mut actions = Vec::new();
    for result in results {
        if let Some(issue) = result.issues.first() {
            issues.push(issue.clone());
        }
        if let Some(impact) = result.impacts.first() {
            impacts.push(impact.clone());
        }
        if let Some(action) = result.actions.first() {
            actions.push(action.clone());
        }
    }

    SectionSummary {
        priority,
        issues,
        impacts,
        actions,
    }
}

/// Select the dominant pillar and emit the unified key message.
///
/// Pillars compare by most-urgent priority; ties resolve in the fixed
/// precedence technical, content, authority. When no pillar is more urgent
/// than Medium, the generic systematic-optimization message is used.
pub fn unified_finding(
    technical: &SectionSummary,
    content: &SectionSummary,
    authority: &SectionSummary,
    subtitle: impl Into<String>,
) -> UnifiedFinding {
    let pillars = [
        (Pillar::Technical, technical.priority),
        (Pillar::Content, content.priority),
        (Pillar::Authority, authority.priority),
    ];

    let mut dominant = pillars[0];
    for candidate in &pillars[1..] {
        if candidate.1 < dominant.1 {
            dominant = *candidate;
        }
    }

    let key_message = if dominant.1 >= Priority::Medium {
        "Systematic optimization across all pillars will unlock organic growth potential."
    } else {
        dominant_concern(dominant.0)
    };

    UnifiedFinding {
        pillar: dominant.0,
        key_message: key_message.to_string(),
        subtitle: subtitle.into(),
    }
}

/// Build per-pillar executive summary sentences from the top issue and
/// impact of each section.
pub fn executive_summary(
    technical: &SectionSummary,
    content: &SectionSummary,
    authority: &SectionSummary,
) -> ExecutiveSummary {
    ExecutiveSummary {
        technical: pillar_sentence(Pillar::Technical, technical),
        content: pillar_sentence(Pillar::Content, content),
        authority: pillar_sentence(Pillar::Authority, authority),
    }
}

fn pillar_sentence(pillar: Pillar, summary: &SectionSummary) -> String {
    match (summary.issues.first(), summary.impacts.first()) {
        (Some(issue), Some(impact)) => format!("{issue}. {impact}"),
        _ => format!("{pillar}: Optimization opportunities identified."),
    }
}

fn dominant_concern(pillar: Pillar) -> &'static str {
    match pillar {
        Pillar::Technical => {
            "Technical barriers must be resolved before content investments can deliver full ROI."
        }
        Pillar::Content => {
            "Content gaps and on-page optimization represent the primary growth lever."
        }
        Pillar::Authority => {
            "Authority constraints limit competitive reach regardless of content quality."
        }
    }
}

fn canned_triple(area: AreaKind) -> (&'static str, &'static str, &'static str) {
    match area {
        AreaKind::OrganicTraffic => (
            "Organic traffic limited by keyword position performance",
            "Significant non-branded demand remains uncaptured",
            "Target position improvements for mid-ranking keywords",
        ),
        AreaKind::Competitive => (
            "Competitive authority gap restricts ranking potential",
            "Competitors monopolize high-value commercial terms",
            "Launch strategic link building campaign",
        ),
        AreaKind::Engagement => (
            "Engagement metrics below benchmark",
            "Content-intent mismatch limits conversion potential",
            "Optimize content for user intent alignment",
        ),
        AreaKind::SiteHealth => (
            "Technical debt concentrated in crawl-impacting issues",
            "Crawl budget wasted on error states instead of valuable content",
            "Resolve crawl-impacting errors before scaling content",
        ),
        AreaKind::MetaTags => (
            "Pages lack optimized titles and meta descriptions",
            "Search engines struggle to properly index and rank pages",
            "Implement systematic on-page optimization program",
        ),
        AreaKind::KeywordGap => (
            "Competitors rank for thousands of untargeted keywords",
            "Qualified search demand flows to alternatives",
            "Create content targeting high-value gap keywords",
        ),
        AreaKind::KeywordIntent => (
            "Portfolio heavily skewed toward informational content",
            "Limited coverage of purchase-stage queries",
            "Expand commercial content for purchase-intent terms",
        ),
        AreaKind::TechnicalSeo => (
            "Indexing and performance faults block discoverability",
            "Site content remains invisible to organic search",
            "Audit and resolve indexing blocks immediately",
        ),
        AreaKind::DomainAuthority => (
            "Domain rating trails the competitive average",
            "Competitors dominate SERP share for valuable terms",
            "Launch strategic digital PR campaign",
        ),
    }
}
