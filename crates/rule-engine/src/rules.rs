//! The Six Site Tracking Rules
//!
//! Each rule is an independent filter over the same snapshot, projecting
//! matching rows to their site identifiers in row order.

use crate::activation::overdue_days;
use crate::engine::Snapshot;
use crate::report::SiteNumber;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum overdue day count for the activation rule
pub const ACTIVATION_OVERDUE_DAYS: u64 = 30;
/// Days a site may stay `Selected`
pub const SELECTED_STALE_DAYS: i64 = 365;
/// Days a site may stay `SIV Ready`
pub const SIV_READY_STALE_DAYS: i64 = 90;

const SELECTED_STATUS: &str = "Selected";
const SIV_READY_STATUS: &str = "SIV Ready";

/// A fixed site tracking rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Activation text says `Overdue` by at least 30 days
    ActivationOverdue,
    /// PSV completed after the site was selected
    PsvAfterSelected,
    /// First submission planned after all approvals planned
    PlannedSubmissionAfterApproval,
    /// First submission completed after all approvals completed
    ActualSubmissionAfterApproval,
    /// Status `Selected` effective for 365 days or more
    SelectedStatusStale,
    /// Status `SIV Ready` effective for 90 days or more
    SivReadyStatusStale,
}

impl Rule {
    /// Number of rules
    pub const COUNT: usize = 6;

    /// All rules in report order
    pub const ALL: [Rule; Rule::COUNT] = [
        Rule::ActivationOverdue,
        Rule::PsvAfterSelected,
        Rule::PlannedSubmissionAfterApproval,
        Rule::ActualSubmissionAfterApproval,
        Rule::SelectedStatusStale,
        Rule::SivReadyStatusStale,
    ];

    /// Report heading for the rule
    pub fn name(self) -> &'static str {
        match self {
            Rule::ActivationOverdue => "Activation is over 30 days overdue",
            Rule::PsvAfterSelected => "PSV Date is after Selected Date",
            Rule::PlannedSubmissionAfterApproval => {
                "Planned Submission Date is after Planned Approval Date"
            }
            Rule::ActualSubmissionAfterApproval => {
                "Actual Submission Date is after Actual Approval Date"
            }
            Rule::SelectedStatusStale => "Site has been in a Selected Status for over 365 days",
            Rule::SivReadyStatusStale => "Site has been in a SIV Ready Status for over 90 days",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Run the rule against a snapshot
    pub(crate) fn collect(self, snapshot: &Snapshot<'_>) -> Vec<Option<SiteNumber>> {
        match self {
            Rule::ActivationOverdue => activation_overdue(snapshot),
            Rule::PsvAfterSelected => {
                later_than(snapshot, &snapshot.psv_complete, &snapshot.selected)
            }
            Rule::PlannedSubmissionAfterApproval => later_than(
                snapshot,
                &snapshot.first_submission_planned,
                &snapshot.all_approvals_planned,
            ),
            Rule::ActualSubmissionAfterApproval => later_than(
                snapshot,
                &snapshot.first_submission_complete,
                &snapshot.all_approvals_complete,
            ),
            Rule::SelectedStatusStale => {
                stale_status(snapshot, SELECTED_STATUS, SELECTED_STALE_DAYS)
            }
            Rule::SivReadyStatusStale => {
                stale_status(snapshot, SIV_READY_STATUS, SIV_READY_STALE_DAYS)
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rows whose activation text is overdue by the threshold.
///
/// Blank identifiers are kept here, unlike the date rules, so the row
/// still shows up as an entry in the report.
fn activation_overdue(snapshot: &Snapshot<'_>) -> Vec<Option<SiteNumber>> {
    (0..snapshot.len())
        .filter(|&row| {
            snapshot
                .activation
                .get(row)
                .as_text()
                .and_then(overdue_days)
                .is_some_and(|days| days >= ACTIVATION_OVERDUE_DAYS)
        })
        .map(|row| snapshot.site_numbers[row].clone())
        .collect()
}

/// Identified rows where `later` is strictly after `earlier`
fn later_than(
    snapshot: &Snapshot<'_>,
    later: &[Option<NaiveDateTime>],
    earlier: &[Option<NaiveDateTime>],
) -> Vec<Option<SiteNumber>> {
    (0..snapshot.len())
        .filter(|&row| matches!((later[row], earlier[row]), (Some(a), Some(b)) if a > b))
        .filter_map(|row| snapshot.site_numbers[row].clone())
        .map(Some)
        .collect()
}

/// Identified rows in `status` whose effective date is on or before the cutoff
fn stale_status(
    snapshot: &Snapshot<'_>,
    status: &str,
    threshold_days: i64,
) -> Vec<Option<SiteNumber>> {
    let Some(cutoff) = snapshot
        .reference
        .checked_sub_signed(Duration::days(threshold_days))
    else {
        return Vec::new();
    };

    (0..snapshot.len())
        .filter(|&row| {
            snapshot.site_status.get(row).as_text() == Some(status)
                && matches!(snapshot.status_effective[row], Some(date) if date <= cutoff)
        })
        .filter_map(|row| snapshot.site_numbers[row].clone())
        .map(Some)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_matches_index() {
        for (position, rule) in Rule::ALL.iter().enumerate() {
            assert_eq!(rule.index(), position);
        }
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Rule::ActivationOverdue.to_string(), "Activation is over 30 days overdue");
        assert_eq!(
            Rule::SivReadyStatusStale.name(),
            "Site has been in a SIV Ready Status for over 90 days"
        );
    }
}
