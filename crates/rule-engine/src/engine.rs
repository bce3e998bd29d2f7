//! Evaluation Entry Points

use crate::columns;
use crate::dates::parse_date;
use crate::error::EvaluationError;
use crate::report::{SiteNumber, ViolationReport};
use crate::rules::Rule;
use chrono::{Local, NaiveDateTime};
use site_table::{Column, Table};
use tracing::{debug, info, warn};

/// Columns that must all be present before any rule runs
pub const REQUIRED_COLUMNS: [&str; 10] = [
    columns::SITE_NUMBER,
    columns::ACTIVATION_COMPLETE,
    columns::PSV_COMPLETE,
    columns::SELECTED,
    columns::FIRST_SUBMISSION_PLANNED,
    columns::ALL_APPROVALS_PLANNED,
    columns::FIRST_SUBMISSION_COMPLETE,
    columns::ALL_APPROVALS_COMPLETE,
    columns::SITE_STATUS,
    columns::SITE_STATUS_EFFECTIVE_DATE,
];

/// Evaluate all rules against a table as of `reference`.
///
/// Either every rule runs or, when a required column is absent, none does.
/// The table is only borrowed; parsed dates live in a private snapshot.
pub fn evaluate(
    table: &Table,
    reference: NaiveDateTime,
) -> Result<ViolationReport, EvaluationError> {
    let snapshot = Snapshot::capture(table, reference)?;
    info!(
        "Evaluating {} site rows against reference date {}",
        snapshot.len(),
        reference
    );

    let sites = Rule::ALL.map(|rule| {
        let sites = rule.collect(&snapshot);
        debug!("{}: {} site(s)", rule, sites.len());
        sites
    });

    let report = ViolationReport::from_sites(sites);
    info!("Evaluation complete: {} flagged entries", report.total());
    Ok(report)
}

/// Evaluate all rules as of the current local time
pub fn evaluate_now(table: &Table) -> Result<ViolationReport, EvaluationError> {
    evaluate(table, Local::now().naive_local())
}

/// Per-evaluation view of the table with date columns parsed once
pub(crate) struct Snapshot<'a> {
    pub(crate) reference: NaiveDateTime,
    pub(crate) site_numbers: Vec<Option<SiteNumber>>,
    pub(crate) activation: Column<'a>,
    pub(crate) psv_complete: Vec<Option<NaiveDateTime>>,
    pub(crate) selected: Vec<Option<NaiveDateTime>>,
    pub(crate) first_submission_planned: Vec<Option<NaiveDateTime>>,
    pub(crate) all_approvals_planned: Vec<Option<NaiveDateTime>>,
    pub(crate) first_submission_complete: Vec<Option<NaiveDateTime>>,
    pub(crate) all_approvals_complete: Vec<Option<NaiveDateTime>>,
    pub(crate) site_status: Column<'a>,
    pub(crate) status_effective: Vec<Option<NaiveDateTime>>,
}

impl<'a> Snapshot<'a> {
    fn capture(table: &'a Table, reference: NaiveDateTime) -> Result<Self, EvaluationError> {
        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !table.has_column(name))
            .collect();
        if !missing.is_empty() {
            warn!("Rejecting table, missing columns: {:?}", missing);
            return Err(EvaluationError::MissingColumns(missing));
        }

        let site_numbers = require(table, columns::SITE_NUMBER)?
            .iter()
            .map(SiteNumber::from_cell)
            .collect();

        Ok(Self {
            reference,
            site_numbers,
            activation: require(table, columns::ACTIVATION_COMPLETE)?,
            psv_complete: date_column(require(table, columns::PSV_COMPLETE)?),
            selected: date_column(require(table, columns::SELECTED)?),
            first_submission_planned: date_column(require(
                table,
                columns::FIRST_SUBMISSION_PLANNED,
            )?),
            all_approvals_planned: date_column(require(table, columns::ALL_APPROVALS_PLANNED)?),
            first_submission_complete: date_column(require(
                table,
                columns::FIRST_SUBMISSION_COMPLETE,
            )?),
            all_approvals_complete: date_column(require(table, columns::ALL_APPROVALS_COMPLETE)?),
            site_status: require(table, columns::SITE_STATUS)?,
            status_effective: date_column(require(table, columns::SITE_STATUS_EFFECTIVE_DATE)?),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.site_numbers.len()
    }
}

fn require<'a>(table: &'a Table, name: &'static str) -> Result<Column<'a>, EvaluationError> {
    table
        .column(name)
        .ok_or_else(|| EvaluationError::MissingColumns(vec![name]))
}

fn date_column(column: Column<'_>) -> Vec<Option<NaiveDateTime>> {
    let dates: Vec<_> = column.iter().map(parse_date).collect();

    let unreadable = column
        .iter()
        .zip(&dates)
        .filter(|(cell, date)| !cell.is_empty() && date.is_none())
        .count();
    if unreadable > 0 {
        debug!("{}: {} cell(s) are not readable dates", column.name(), unreadable);
    }

    dates
}
