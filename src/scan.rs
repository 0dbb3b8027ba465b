//! Scan controller: ordered, short-circuiting sweep over a record batch.
//!
//! The controller moves through three states: idle until invoked, scanning
//! while records remain, then terminal `Matched` or `NotFound`. Records are
//! visited strictly in the order the caller supplied (the store is expected
//! to deliver most-recent-first), and the scan stops at the first match.
//!
//! Decode failures are per-record: each one is counted, the last is kept for
//! diagnosis, and the scan continues. Only the aggregate surfaces, inside the
//! `NotFound` payload, so a caller can tell "no vaccination among N valid
//! records" apart from "every record failed to parse".

use tracing::{debug, info};

use crate::codes::CodeTable;
use crate::decoder;
use crate::error::DecodeError;
use crate::matcher::{self, MatchOutcome};
use crate::record::RawRecord;

// =============================================================================
// RESULT
// =============================================================================

/// Terminal outcome of one scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The first record (in input order) whose product code is in the table.
    Matched(MatchOutcome),
    /// Sequence exhausted without a hit. Decode-failure information rides
    /// along so the caller can qualify the negative result.
    NotFound {
        decode_failures: usize,
        last_error: Option<DecodeError>,
    },
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    /// Number of records that failed to decode during the scan. Zero for a
    /// match, since the scan stops before visiting further records.
    pub fn decode_failures(&self) -> usize {
        match self {
            MatchResult::Matched(_) => 0,
            MatchResult::NotFound {
                decode_failures, ..
            } => *decode_failures,
        }
    }
}

// =============================================================================
// SCAN
// =============================================================================

/// Scan `records` in order against `table`, stopping at the first match.
///
/// Pure with respect to its inputs: same records and table, same result.
/// An empty batch resolves to `NotFound` with zero failures.
pub fn scan(records: &[RawRecord], table: &CodeTable) -> MatchResult {
    let mut decode_failures = 0usize;
    let mut last_error: Option<DecodeError> = None;

    for (index, record) in records.iter().enumerate() {
        let fact = match decoder::decode(record) {
            Ok(fact) => fact,
            Err(err) => {
                debug!(index, %err, "record failed to decode, continuing scan");
                decode_failures += 1;
                last_error = Some(err);
                continue;
            }
        };

        if let Some(outcome) = matcher::match_fact(&fact, table) {
            info!(
                index,
                display_name = %outcome.display_name,
                "vaccination record matched"
            );
            return MatchResult::Matched(outcome);
        }
    }

    info!(
        records = records.len(),
        decode_failures, "scan exhausted without a match"
    );
    MatchResult::NotFound {
        decode_failures,
        last_error,
    }
}

// =============================================================================
// CHECK HANDLE
// =============================================================================

/// A configured vaccination check: the code table to match against and the
/// vaccine-type label the UI shows. Owns no mutable state; one instance can
/// serve any number of independent scans.
#[derive(Clone, Debug)]
pub struct VaccinationCheck {
    vaccine_type: String,
    table: CodeTable,
}

impl VaccinationCheck {
    pub fn new(vaccine_type: impl Into<String>, table: CodeTable) -> Self {
        Self {
            vaccine_type: vaccine_type.into(),
            table,
        }
    }

    /// Display label only; never participates in matching.
    pub fn vaccine_type(&self) -> &str {
        &self.vaccine_type
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn scan(&self, records: &[RawRecord]) -> MatchResult {
        scan(records, &self.table)
    }
}
