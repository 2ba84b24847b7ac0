//! Priority classification rules.
//!
//! Pure threshold rules mapping a [`MetricSet`] to a [`Priority`]. Boundary
//! values always fall to the lower-severity side: the comparisons are strict,
//! so a score of exactly 60 is High rather than Critical.

use crate::domain::{AreaKind, MetricSet, OrganicSignals, Priority};

/// Classify one area's metrics into a priority rating.
///
/// Deterministic and total. Signals are evaluated in fixed precedence:
/// the organic composite rule for the organic-traffic area, then health
/// score, then affected percentage, then raw count. When no usable metric
/// is present the area defaults to Medium.
pub fn classify(area: AreaKind, metrics: &MetricSet) -> Priority {
    if area == AreaKind::OrganicTraffic {
        if let Some(signals) = &metrics.organic {
            return classify_organic(signals);
        }
    }

    if let Some(score) = metrics.health_score {
        return score_priority(score);
    }
    if let Some(percentage) = metrics.affected_percentage {
        return percentage_priority(percentage);
    }
    if let Some(count) = metrics.issue_count {
        return count_priority(count);
    }

    Priority::Medium
}

/// Score rule for 0-100 quality scores where higher is better.
pub fn score_priority(score: u8) -> Priority {
    if score < 60 {
        Priority::Critical
    } else if score < 75 {
        Priority::High
    } else if score < 85 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Percentage rule for affected-page or affected-traffic shares where
/// higher is worse.
pub fn percentage_priority(percentage: f64) -> Priority {
    if percentage > 20.0 {
        Priority::Critical
    } else if percentage > 10.0 {
        Priority::High
    } else if percentage > 5.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Count rule for raw error or issue counts where higher is worse.
pub fn count_priority(count: u64) -> Priority {
    if count > 1000 {
        Priority::Critical
    } else if count > 500 {
        Priority::High
    } else if count > 100 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Composite rule for the organic-traffic area. Conditions are evaluated in
/// a fixed order with the first true condition winning.
fn classify_organic(signals: &OrganicSignals) -> Priority {
    if signals.organic_share_pct < 30.0 {
        return Priority::Critical;
    }
    if let Some(yoy) = signals.yoy_change_pct {
        if yoy < -15.0 {
            return Priority::High;
        }
    }
    if signals.page_two_plus_pct > 50.0 {
        return Priority::High;
    }
    let growing = match signals.yoy_change_pct {
        None => true,
        Some(yoy) => yoy > 0.0,
    };
    if signals.organic_share_pct > 50.0 && growing {
        return Priority::Low;
    }

    Priority::Medium
}

#[cfg(test)]
mod tests {
    use super::{classify, count_priority, percentage_priority, score_priority};
    use crate::domain::{AreaKind, MetricSet, OrganicSignals, Priority};

    fn organic(share: f64, yoy: Option<f64>, page_two_plus: f64) -> MetricSet {
        MetricSet {
            organic: Some(OrganicSignals {
                organic_share_pct: share,
                yoy_change_pct: yoy,
                page_two_plus_pct: page_two_plus,
            }),
            ..MetricSet::default()
        }
    }

    #[test]
    fn score_boundaries_fall_to_lower_severity() {
        assert_eq!(score_priority(59), Priority::Critical);
        assert_eq!(score_priority(60), Priority::High);
        assert_eq!(score_priority(74), Priority::High);
        assert_eq!(score_priority(75), Priority::Medium);
        assert_eq!(score_priority(84), Priority::Medium);
        assert_eq!(score_priority(85), Priority::Low);
        assert_eq!(score_priority(100), Priority::Low);
    }

    #[test]
    fn percentage_boundaries_are_strict() {
        assert_eq!(percentage_priority(20.0), Priority::High);
        assert_eq!(percentage_priority(20.01), Priority::Critical);
        assert_eq!(percentage_priority(10.0), Priority::Medium);
        assert_eq!(percentage_priority(10.5), Priority::High);
        assert_eq!(percentage_priority(5.0), Priority::Low);
        assert_eq!(percentage_priority(5.1), Priority::Medium);
        assert_eq!(percentage_priority(0.0), Priority::Low);
    }

    #[test]
    fn count_boundaries_are_strict() {
        assert_eq!(count_priority(100), Priority::Low);
        assert_eq!(count_priority(101), Priority::Medium);
        assert_eq!(count_priority(500), Priority::Medium);
        assert_eq!(count_priority(501), Priority::High);
        assert_eq!(count_priority(1000), Priority::High);
        assert_eq!(count_priority(1001), Priority::Critical);
        assert_eq!(count_priority(0), Priority::Low);
    }

    #[test]
    fn score_rule_is_monotonic() {
        let mut previous = score_priority(0);
        for score in 1..=100u8 {
            let current = score_priority(score);
            assert!(
                current >= previous,
                "score {score} regressed from {previous} to {current}"
            );
            previous = current;
        }
    }

    #[test]
    fn organic_low_share_is_critical() {
        let metrics = organic(25.0, Some(10.0), 20.0);
        assert_eq!(classify(AreaKind::OrganicTraffic, &metrics), Priority::Critical);
    }

    #[test]
    fn organic_steep_decline_is_high() {
        let metrics = organic(45.0, Some(-20.0), 20.0);
        assert_eq!(classify(AreaKind::OrganicTraffic, &metrics), Priority::High);
    }

    #[test]
    fn organic_page_two_share_is_high() {
        let metrics = organic(45.0, Some(5.0), 60.0);
        assert_eq!(classify(AreaKind::OrganicTraffic, &metrics), Priority::High);
    }

    #[test]
    fn organic_dominant_and_growing_is_low() {
        let metrics = organic(55.0, None, 30.0);
        assert_eq!(classify(AreaKind::OrganicTraffic, &metrics), Priority::Low);
        let metrics = organic(55.0, Some(8.0), 30.0);
        assert_eq!(classify(AreaKind::OrganicTraffic, &metrics), Priority::Low);
    }

    #[test]
    fn organic_middling_share_is_medium() {
        let metrics = organic(45.0, Some(2.0), 40.0);
        assert_eq!(classify(AreaKind::OrganicTraffic, &metrics), Priority::Medium);
    }

    #[test]
    fn precedence_prefers_score_over_percentage_and_count() {
        let metrics = MetricSet {
            health_score: Some(90),
            affected_percentage: Some(25.0),
            issue_count: Some(2000),
            ..MetricSet::default()
        };
        assert_eq!(classify(AreaKind::SiteHealth, &metrics), Priority::Low);

        let metrics = MetricSet {
            affected_percentage: Some(25.0),
            issue_count: Some(50),
            ..MetricSet::default()
        };
        assert_eq!(classify(AreaKind::TechnicalSeo, &metrics), Priority::Critical);
    }

    #[test]
    fn empty_metrics_default_to_medium() {
        let metrics = MetricSet::default();
        assert_eq!(classify(AreaKind::KeywordGap, &metrics), Priority::Medium);
        assert_eq!(classify(AreaKind::OrganicTraffic, &metrics), Priority::Medium);
    }
}
