use super::config::ReportKind;
use crate::core::models::frame::FrameIndex;
use std::path::PathBuf;

/// A non-fatal problem met while scanning a frame's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportIssue {
    MissingReport {
        frame: FrameIndex,
        kind: ReportKind,
        path: PathBuf,
    },
    UnreadableReport {
        frame: FrameIndex,
        kind: ReportKind,
        path: PathBuf,
        reason: String,
    },
    MalformedRows {
        frame: FrameIndex,
        kind: ReportKind,
        count: usize,
    },
    MalformedNumeric {
        frame: FrameIndex,
        line: u64,
        property: String,
        value: String,
    },
}

/// What an aggregation actually saw: how many frames had the report, and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    pub frames_with_report: usize,
    pub issues: Vec<ReportIssue>,
}

impl Coverage {
    pub fn record(&mut self, issue: ReportIssue) {
        self.issues.push(issue);
    }

    pub(crate) fn record_skipped_rows(&mut self, frame: FrameIndex, kind: ReportKind, count: usize) {
        if count > 0 {
            self.record(ReportIssue::MalformedRows { frame, kind, count });
        }
    }

    pub fn missing_reports(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, ReportIssue::MissingReport { .. }))
            .count()
    }

    pub fn unreadable_reports(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, ReportIssue::UnreadableReport { .. }))
            .count()
    }

    pub fn skipped_rows(&self) -> usize {
        self.issues
            .iter()
            .map(|i| match i {
                ReportIssue::MalformedRows { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }

    pub fn malformed_values(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, ReportIssue::MalformedNumeric { .. }))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}
