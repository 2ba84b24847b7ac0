//! Report model and rendering for Searchdeck outputs.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::aggregate::{
    aggregate_section, executive_summary, pillar_areas, unified_finding,
};
use crate::domain::{
    AreaKind, AreaResult, AuditContext, ExecutiveSummary, KpiTargets, Pillar, SectionSummary,
    UnifiedFinding,
};
use crate::error::{Result, SearchdeckError};

/// Number of findings displayed per section in rendered output.
const TOP_FINDINGS_DISPLAYED: usize = 3;

/// Complete audit report for one brand and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Brand, month, and website-type context the report was built for.
    pub context: AuditContext,
    /// Source tools the metrics were extracted from.
    pub tools: Vec<String>,
    /// Per-area results in canonical area order.
    pub areas: Vec<AreaResult>,
    /// Technical pillar summary.
    pub technical: SectionSummary,
    /// Content pillar summary.
    pub content: SectionSummary,
    /// Authority pillar summary.
    pub authority: SectionSummary,
    /// Per-pillar executive summary sentences.
    pub executive: ExecutiveSummary,
    /// Dominant-concern finding across pillars.
    pub unified: UnifiedFinding,
    /// Static KPI benchmark block.
    pub kpi_targets: KpiTargets,
}

/// Assembles an [`AuditReport`] from per-area results.
///
/// Construction fails when any of the nine canonical areas has no result;
/// duplicate submissions for an area keep the last one.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    context: AuditContext,
    tools: Vec<String>,
    results: BTreeMap<AreaKind, AreaResult>,
}

impl ReportBuilder {
    /// Create a builder for the given audit context.
    pub fn new(context: AuditContext) -> Self {
        Self {
            context,
            tools: Vec::new(),
            results: BTreeMap::new(),
        }
    }

    /// Record a source tool name for the report header.
    pub fn tool(mut self, name: impl Into<String>) -> Self {
        self.tools.push(name.into());
        self
    }

    /// Add one area result.
    pub fn area(mut self, result: AreaResult) -> Self {
        self.results.insert(result.area, result);
        self
    }

    /// Assemble the report, aggregating pillars and the unified finding.
    pub fn build(self) -> Result<AuditReport> {
        for area in AreaKind::CANONICAL {
            if !self.results.contains_key(&area) {
                return Err(SearchdeckError::MissingArea(area));
            }
        }

        let areas: Vec<AreaResult> = AreaKind::CANONICAL
            .iter()
            .map(|area| self.results[area].clone())
            .collect();

        let technical = section_for(&self.results, Pillar::Technical);
        let content = section_for(&self.results, Pillar::Content);
        let authority = section_for(&self.results, Pillar::Authority);

        let executive = executive_summary(&technical, &content, &authority);
        let subtitle = self.results[&AreaKind::OrganicTraffic].key_message.clone();
        let unified = unified_finding(&technical, &content, &authority, subtitle);

        Ok(AuditReport {
            context: self.context,
            tools: self.tools,
            areas,
            technical,
            content,
            authority,
            executive,
            unified,
            kpi_targets: KpiTargets::default(),
        })
    }
}

fn section_for(results: &BTreeMap<AreaKind, AreaResult>, pillar: Pillar) -> SectionSummary {
    let members: Vec<AreaResult> = pillar_areas(pillar)
        .iter()
        .filter_map(|area| results.get(area).cloned())
        .collect();
    aggregate_section(&members)
}

/// Render a report as Markdown.
pub fn render_markdown(report: &AuditReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "# SEO Audit Report: {}\n",
        report.context.brand_name
    );
    let _ = writeln!(output, "- Month: {}", report.context.audit_month);
    if !report.tools.is_empty() {
        let _ = writeln!(output, "- Sources: {}", report.tools.join(", "));
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "## Key Finding\n");
    let _ = writeln!(
        output,
        "**[{}] {}** {}\n",
        report.unified.pillar, report.unified.key_message, report.unified.subtitle
    );

    let _ = writeln!(output, "## Executive Summary\n");
    let _ = writeln!(output, "- Technical: {}", report.executive.technical);
    let _ = writeln!(output, "- Content: {}", report.executive.content);
    let _ = writeln!(output, "- Authority: {}\n", report.executive.authority);

    append_section_markdown(&mut output, Pillar::Technical, &report.technical);
    append_section_markdown(&mut output, Pillar::Content, &report.content);
    append_section_markdown(&mut output, Pillar::Authority, &report.authority);

    let _ = writeln!(output, "## Analysis Areas\n");
    for area in &report.areas {
        let _ = writeln!(
            output,
            "### {} [{}]\n",
            area.area.title(),
            area.priority.badge()
        );
        let _ = writeln!(output, "{}\n", area.key_message);
        for (index, issue) in area.issues.iter().take(TOP_FINDINGS_DISPLAYED).enumerate() {
            let _ = writeln!(output, "- Issue: {issue}");
            if let Some(impact) = area.impacts.get(index) {
                let _ = writeln!(output, "  - Impact: {impact}");
            }
            if let Some(action) = area.actions.get(index) {
                let _ = writeln!(output, "  - Action: {action}");
            }
        }
        let _ = writeln!(output);
    }

    append_kpi_markdown(&mut output, &report.kpi_targets);
    output
}

/// Render a report as plain text for terminal output.
pub fn render_text(report: &AuditReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "SEO Audit Report: {} ({})",
        report.context.brand_name, report.context.audit_month
    );
    let _ = writeln!(
        output,
        "Key finding [{}]: {}",
        report.unified.pillar, report.unified.key_message
    );
    let _ = writeln!(output, "  {}\n", report.unified.subtitle);

    for area in &report.areas {
        let _ = writeln!(
            output,
            "[{}] {}: {}",
            area.priority.badge(),
            area.area.title(),
            area.key_message
        );
    }
    let _ = writeln!(output);

    append_section_text(&mut output, Pillar::Technical, &report.technical);
    append_section_text(&mut output, Pillar::Content, &report.content);
    append_section_text(&mut output, Pillar::Authority, &report.authority);
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

fn append_section_markdown(output: &mut String, pillar: Pillar, section: &SectionSummary) {
    let _ = writeln!(output, "## {} [{}]\n", pillar, section.priority.badge());
    for (index, issue) in section
        .issues
        .iter()
        .take(TOP_FINDINGS_DISPLAYED)
        .enumerate()
    {
        let _ = writeln!(output, "- Issue: {issue}");
        if let Some(impact) = section.impacts.get(index) {
            let _ = writeln!(output, "  - Impact: {impact}");
        }
        if let Some(action) = section.actions.get(index) {
            let _ = writeln!(output, "  - Action: {action}");
        }
    }
    let _ = writeln!(output);
}

fn append_section_text(output: &mut String, pillar: Pillar, section: &SectionSummary) {
    let _ = writeln!(output, "{} [{}]", pillar, section.priority.badge());
    for issue in section.issues.iter().take(TOP_FINDINGS_DISPLAYED) {
        let _ = writeln!(output, "  - {issue}");
    }
}

fn append_kpi_markdown(output: &mut String, targets: &KpiTargets) {
    let _ = writeln!(output, "## KPI Targets\n");
    let _ = writeln!(
        output,
        "- CTR: {} now, target {} (benchmark {})",
        targets.current_ctr, targets.target_ctr, targets.benchmark_ctr
    );
    let _ = writeln!(
        output,
        "- Average position: {} now, target improvement {}",
        targets.current_avg_position, targets.target_position_improvement
    );
    let _ = writeln!(
        output,
        "- Organic sessions: {} now, target {}",
        targets.current_organic_sessions, targets.target_traffic_improvement
    );
}
