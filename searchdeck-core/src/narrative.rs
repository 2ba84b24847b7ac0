//! Narrative synthesis: key messages and business-impact phrasing.
//!
//! Messages follow the `Insight + Significance + Consequence` formula: an
//! area-specific clause parameterized by the metric values, a qualifying
//! clause, and a closing consequence phrase keyed by priority. Assembled
//! sentences are hard-capped at 30 words with a trailing ellipsis.

use crate::domain::{AreaKind, AuditContext, MetricSet, Priority};

/// Maximum number of words in a synthesized key message.
pub const MESSAGE_WORD_CAP: usize = 30;

/// Transition connectives that open significance and consequence clauses.
pub const TRANSITIONS: [&str; 6] = ["but", "which", "leaving", "causing", "indicating", "exposing"];

/// Issue, impact, and action statements for one detected issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactTriple {
    /// Business framing of the issue.
    pub issue: String,
    /// Quantified business impact.
    pub impact: String,
    /// Recommended action.
    pub action: String,
}

struct ImpactRule {
    key: &'static str,
    issue: &'static str,
    impact: &'static str,
    action: &'static str,
}

// Ordered: the first key matching the issue name wins, so more specific
// keys must stay ahead of broader ones.
const IMPACT_RULES: &[ImpactRule] = &[
    ImpactRule {
        key: "internal links are broken",
        issue: "Critical link architecture failures creating navigation blind spots",
        impact: "**{count} broken pathways** are fragmenting user journeys and diluting link equity across money pages",
        action: "Implement systematic link audit and remediation protocol",
    },
    ImpactRule {
        key: "4xx status code",
        issue: "Pages returning error states to search engines",
        impact: "**{count} pages** are invisible to Google, rendering content investments worthless",
        action: "Restore indexability for high-value pages within 48 hours",
    },
    ImpactRule {
        key: "hreflang conflicts",
        issue: "International targeting signals conflicting across markets",
        impact: "Market-specific content is reaching wrong audiences, **leaking qualified demand** to wrong regions",
        action: "Audit and correct hreflang implementation across all markets",
    },
    ImpactRule {
        key: "duplicate meta descriptions",
        issue: "Pages lack unique snippet signals for search engines",
        impact: "**{count} pages** compete against themselves for clicks, **suppressing CTR** and visibility",
        action: "Deploy unique meta descriptions prioritizing revenue-generating pages first",
    },
    ImpactRule {
        key: "low text-html ratio",
        issue: "Content depth insufficient for topical authority",
        impact: "Thin content signals weakness to Google, **limiting ranking potential** for competitive terms",
        action: "Expand content depth on high-opportunity pages to establish expertise",
    },
    ImpactRule {
        key: "temporary redirect",
        issue: "URL architecture unstable with temporary redirect chains",
        impact: "**{count} temporary redirects** prevent authority consolidation and confuse crawlers",
        action: "Convert temporary (302) to permanent (301) redirects immediately",
    },
    ImpactRule {
        key: "uncached javascript and css",
        issue: "Assets reload on every visit, degrading page speed",
        impact: "Poor Core Web Vitals trigger ranking suppression and **user abandonment**",
        action: "Implement browser caching for static resources to optimize load times",
    },
    ImpactRule {
        key: "expired certificate",
        issue: "Security certificate expired or expiring soon",
        impact: "**Trust signals compromised**, browsers warn visitors, conversion rates plummet",
        action: "Renew SSL certificate immediately and implement auto-renewal",
    },
];

/// Translate a technical issue into C-suite business language.
///
/// The lookup is a case-insensitive substring match of each table key
/// against the issue name, in table declaration order; the first matching
/// key wins. Unmatched issues get a generic templated triple.
pub fn business_impact(issue_name: &str, count: u64) -> ImpactTriple {
    let normalized = issue_name.to_lowercase();
    let formatted = format_count(count);

    for rule in IMPACT_RULES {
        if normalized.contains(rule.key) {
            return ImpactTriple {
                issue: rule.issue.to_string(),
                impact: rule.impact.replace("{count}", &formatted),
                action: rule.action.to_string(),
            };
        }
    }

    ImpactTriple {
        issue: format!("{issue_name} detected across site"),
        impact: format!("**{formatted} instances** are fragmenting site quality signals"),
        action: "Prioritize remediation based on page value and traffic potential".to_string(),
    }
}

/// Format a count with thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            output.push(',');
        }
        output.push(digit);
    }
    output
}

/// Closing consequence phrase for a priority tier. Each phrase opens with
/// a transition connective.
pub fn consequence_phrase(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "exposing revenue risk while these barriers remain unresolved",
        Priority::High => "leaving significant non-branded demand uncaptured",
        Priority::Medium => "indicating incremental opportunity from targeted optimization",
        Priority::Low => "leaving room to shift focus toward content and authority growth",
    }
}

/// Synthesize the key message for one area.
pub fn key_message(
    area: AreaKind,
    metrics: &MetricSet,
    priority: Priority,
    context: &AuditContext,
) -> String {
    let (insight, significance) = insight_clauses(area, metrics, priority, context);
    compose_key_message(&insight, &significance, consequence_phrase(priority))
}

/// Assemble and cap an `Insight + Significance + Consequence` sentence.
pub fn compose_key_message(insight: &str, significance: &str, consequence: &str) -> String {
    let message = format!("{insight} {significance}, {consequence}.");
    truncate_words(&message, MESSAGE_WORD_CAP)
}

/// Keep the first `cap` words, appending an ellipsis when words were cut.
pub fn truncate_words(message: &str, cap: usize) -> String {
    let words: Vec<&str> = message.split_whitespace().collect();
    if words.len() <= cap {
        return message.to_string();
    }
    let mut truncated = words[..cap].join(" ");
    truncated.push_str("...");
    truncated
}

fn insight_clauses(
    area: AreaKind,
    metrics: &MetricSet,
    priority: Priority,
    context: &AuditContext,
) -> (String, String) {
    match area {
        AreaKind::OrganicTraffic => organic_clauses(metrics),
        AreaKind::Competitive => (
            format!(
                "{} trails the competitive average by {:.0} rating points",
                context.brand_name,
                metrics.affected_percentage.unwrap_or(0.0)
            ),
            "which restricts ranking reach for high-volume commercial terms".to_string(),
        ),
        AreaKind::Engagement => engagement_clauses(metrics),
        AreaKind::SiteHealth => site_health_clauses(metrics, priority),
        AreaKind::MetaTags => meta_tags_clauses(metrics),
        AreaKind::KeywordGap => (
            format!(
                "Competitors rank for {} keywords the brand does not target",
                format_count(metrics.issue_count.unwrap_or(0))
            ),
            "which leaves qualified demand flowing to alternatives".to_string(),
        ),
        AreaKind::KeywordIntent => (
            format!(
                "Informational content exceeds the balanced portfolio benchmark by {:.0} points",
                metrics.affected_percentage.unwrap_or(0.0)
            ),
            "which concedes purchase-intent searches to competitors".to_string(),
        ),
        AreaKind::TechnicalSeo => technical_clauses(metrics),
        AreaKind::DomainAuthority => (
            format!(
                "Domain rating sits {:.0} points below the competitive average",
                metrics.affected_percentage.unwrap_or(0.0)
            ),
            "which caps SERP competitiveness for valuable terms".to_string(),
        ),
    }
}

fn organic_clauses(metrics: &MetricSet) -> (String, String) {
    let Some(signals) = &metrics.organic else {
        return (
            "Organic performance data was unavailable for this period".to_string(),
            "which limits visibility into channel health".to_string(),
        );
    };

    let share = signals.organic_share_pct;
    let status = if share > 50.0 {
        format!("the dominant channel at {share:.0}% of traffic")
    } else if share > 30.0 {
        format!("stable at {share:.0}% of traffic")
    } else {
        format!("underperforming at only {share:.0}% of traffic")
    };

    let limitation = if signals.page_two_plus_pct > 50.0 {
        format!(
            "but limited by {:.0}% of keywords ranking beyond page one",
            signals.page_two_plus_pct
        )
    } else if share < 30.0 {
        "but creating high dependency on paid channels".to_string()
    } else {
        "but constrained by mid-position keyword performance".to_string()
    };

    (format!("Organic search is {status}"), limitation)
}

fn engagement_clauses(metrics: &MetricSet) -> (String, String) {
    let decline = metrics.affected_percentage.unwrap_or(0.0);
    if decline > 5.0 {
        (
            format!("Engagement rate declined {decline:.1}% period over period"),
            "which signals content-intent mismatch".to_string(),
        )
    } else {
        (
            format!("Engagement rate held within {decline:.1}% of the prior period"),
            "which supports the current content direction".to_string(),
        )
    }
}

fn site_health_clauses(metrics: &MetricSet, priority: Priority) -> (String, String) {
    let Some(score) = metrics.health_score else {
        return (
            "Site health signals were incomplete for this crawl".to_string(),
            "which obscures the technical baseline".to_string(),
        );
    };

    let condition = match priority {
        Priority::Critical => "critical technical barriers",
        Priority::High => "significant technical debt",
        Priority::Medium => "moderate technical debt",
        Priority::Low => "a solid technical foundation",
    };

    (
        format!("Site health score of {score}%"),
        format!("reflects {condition}"),
    )
}

fn meta_tags_clauses(metrics: &MetricSet) -> (String, String) {
    let count = metrics.issue_count.unwrap_or(0);
    if count > 100 {
        (
            format!(
                "{} pages carry duplicate or missing meta signals",
                format_count(count)
            ),
            "which prevents search engines from differentiating content".to_string(),
        )
    } else {
        (
            "On-page meta signals are well structured".to_string(),
            "which confirms meta optimization is not limiting visibility".to_string(),
        )
    }
}

fn technical_clauses(metrics: &MetricSet) -> (String, String) {
    let significance = "which blocks content from reaching searchers".to_string();
    if let Some(percentage) = metrics.affected_percentage {
        (
            format!("Indexing and performance faults affect {percentage:.0}% of crawled pages"),
            significance,
        )
    } else {
        (
            format!(
                "{} technical faults affect crawl and indexing paths",
                format_count(metrics.issue_count.unwrap_or(0))
            ),
            significance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ImpactTriple, MESSAGE_WORD_CAP, TRANSITIONS, business_impact, compose_key_message,
        consequence_phrase, format_count, key_message, truncate_words,
    };
    use crate::domain::{AreaKind, AuditContext, MetricSet, Priority, WebsiteType};

    fn context() -> AuditContext {
        AuditContext::new("Acme", "August 2026", WebsiteType::Ecommerce)
    }

    #[test]
    fn formats_counts_with_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(350), "350");
        assert_eq!(format_count(1500), "1,500");
        assert_eq!(format_count(85000), "85,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn broken_links_map_to_broken_pathways() {
        let triple = business_impact("Internal links are broken", 350);
        assert!(triple.impact.contains("350"));
        assert!(triple.impact.contains("broken pathways"));
        assert!(triple.issue.contains("link architecture"));
    }

    #[test]
    fn lookup_is_case_insensitive_substring() {
        let triple = business_impact("1,240 pages returned 4XX STATUS CODE errors", 1240);
        assert!(triple.impact.contains("1,240 pages"));
        assert!(triple.action.contains("48 hours"));
    }

    #[test]
    fn first_declared_key_wins_when_two_match() {
        // Both "4XX status code" and "temporary redirect" match; the 4XX
        // rule is declared first and must win regardless of word order.
        let forward = business_impact("Pages with 4XX status code after temporary redirect", 42);
        let reversed = business_impact("Temporary redirect chains ending in 4XX status code", 42);
        assert!(forward.issue.contains("error states"));
        assert_eq!(forward.issue, reversed.issue);
        assert_eq!(forward.action, reversed.action);
    }

    #[test]
    fn unmatched_issue_falls_back_to_generic_triple() {
        let triple = business_impact("Orphaned pages", 1234);
        assert_eq!(triple.issue, "Orphaned pages detected across site");
        assert_eq!(
            triple.impact,
            "**1,234 instances** are fragmenting site quality signals"
        );
        assert_eq!(triple.impact.matches("1,234").count(), 1);
        assert_eq!(triple.issue.matches("Orphaned pages").count(), 1);
        assert!(triple.action.contains("Prioritize remediation"));
    }

    #[test]
    fn consequence_phrases_open_with_a_transition() {
        for priority in [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ] {
            let phrase = consequence_phrase(priority);
            let first = phrase.split_whitespace().next().unwrap();
            assert!(
                TRANSITIONS.contains(&first),
                "{first} is not a transition connective"
            );
        }
    }

    #[test]
    fn composed_messages_respect_the_word_cap() {
        let insight = "word ".repeat(40);
        let message = compose_key_message(insight.trim(), "which runs long", "causing overflow");
        assert!(message.ends_with("..."));
        assert!(message.split_whitespace().count() <= MESSAGE_WORD_CAP + 1);
    }

    #[test]
    fn short_messages_are_not_truncated() {
        let message = compose_key_message(
            "Site health score of 78%",
            "reflects moderate technical debt",
            consequence_phrase(Priority::Medium),
        );
        assert!(!message.contains("..."));
        assert!(message.ends_with('.'));
    }

    #[test]
    fn truncation_appends_ellipsis_exactly_at_the_cap() {
        let long = (0..45).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let capped = truncate_words(&long, 30);
        assert!(capped.ends_with("..."));
        assert_eq!(capped.split_whitespace().count(), 30);
    }

    #[test]
    fn site_health_message_embeds_score_and_medium_consequence() {
        let metrics = MetricSet {
            health_score: Some(78),
            ..MetricSet::default()
        };
        let message = key_message(AreaKind::SiteHealth, &metrics, Priority::Medium, &context());
        assert!(message.contains("78%"));
        assert!(message.contains(consequence_phrase(Priority::Medium)));
        assert!(message.split_whitespace().count() <= MESSAGE_WORD_CAP + 1);
    }

    #[test]
    fn competitive_message_names_the_brand() {
        let metrics = MetricSet {
            affected_percentage: Some(15.0),
            ..MetricSet::default()
        };
        let message = key_message(AreaKind::Competitive, &metrics, Priority::High, &context());
        assert!(message.starts_with("Acme trails the competitive average by 15 rating points"));
    }

    #[test]
    fn organic_message_reflects_channel_status() {
        use crate::domain::OrganicSignals;
        let metrics = MetricSet {
            organic: Some(OrganicSignals {
                organic_share_pct: 55.0,
                yoy_change_pct: Some(4.0),
                page_two_plus_pct: 30.0,
            }),
            ..MetricSet::default()
        };
        let message = key_message(
            AreaKind::OrganicTraffic,
            &metrics,
            Priority::Low,
            &context(),
        );
        assert!(message.contains("dominant channel at 55%"));
        assert!(message.contains("but "));
    }

    #[test]
    fn example_triple_is_deterministic_across_calls() {
        let first = business_impact("duplicate meta descriptions", 420);
        let second = business_impact("duplicate meta descriptions", 420);
        assert_eq!(
            first,
            ImpactTriple {
                issue: second.issue.clone(),
                impact: second.impact.clone(),
                action: second.action.clone(),
            }
        );
        assert!(first.impact.contains("420 pages"));
    }
}
