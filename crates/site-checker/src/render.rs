//! Report rendering

use crate::settings::OutputFormat;
use rule_engine::{SiteNumber, ViolationReport};

/// Placeholder for a flagged row without a site number
pub const MISSING_SITE: &str = "<missing>";

/// Render a report in the requested format
pub fn render(
    report: &ViolationReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_lines(report, "\n", |name| name.to_string())),
        OutputFormat::Markdown => Ok(render_lines(report, "\n\n", |name| {
            format!("**{}**", name)
        })),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn render_lines(
    report: &ViolationReport,
    separator: &str,
    heading: impl Fn(&str) -> String,
) -> String {
    report
        .iter()
        .map(|(rule, sites)| {
            format!(
                "{} - Site Numbers: {}",
                heading(rule.name()),
                site_list(sites)
            )
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn site_list(sites: &[Option<SiteNumber>]) -> String {
    if sites.is_empty() {
        return "None".to_string();
    }
    sites
        .iter()
        .map(|site| site.as_ref().map_or(MISSING_SITE, SiteNumber::as_str))
        .collect::<Vec<_>>()
        .join(", ")
}
