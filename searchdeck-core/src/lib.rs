#![deny(missing_docs)]
//! Searchdeck core library.
//!
//! This crate turns extracted SEO audit metrics into prioritized,
//! business-language findings and assembles them into a complete audit
//! report model.

pub mod aggregate;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fs;
pub mod ingest;
pub mod narrative;
pub mod report;

pub use aggregate::{
    aggregate_section, analyze_area, executive_summary, pillar_areas, unified_finding,
};
pub use domain::{
    AreaKind, AreaResult, AuditContext, ExecutiveSummary, IssueEntry, KpiTargets, MetricSet,
    OrganicSignals, Pillar, Priority, SectionSummary, UnifiedFinding, WebsiteType,
};
pub use engine::{classify, count_priority, percentage_priority, score_priority};
pub use error::{Result, SearchdeckError};
pub use fs::{FileSystem, StdFileSystem};
pub use ingest::{RawAuditData, load_audit_data, sample};
pub use narrative::{ImpactTriple, business_impact, format_count, key_message};
pub use report::{AuditReport, ReportBuilder, render_json, render_markdown, render_text};
