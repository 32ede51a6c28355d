//! Run counters for the alias builder
//!
//! Observability only: the numbers tracked here are reported on stderr and
//! never influence the generated map.

use std::collections::HashMap;

use crate::filter::ExclusionReason;

/// Counters collected over one builder pass
#[derive(Debug, Default)]
pub struct BuildStats {
    /// Total input lines read
    pub lines_read: u64,
    /// Lines skipped for wrong field count
    pub malformed: u64,
    /// Records excluded by the filter, keyed by reason
    pub excluded: HashMap<ExclusionReason, u64>,
    /// Surviving records discarded because the artifact id was already mapped
    pub duplicates: u64,
    /// Aliases in the final map, including seeded overrides
    pub aliases: u64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_line(&mut self) {
        self.lines_read += 1;
    }

    pub fn tick_malformed(&mut self) {
        self.malformed += 1;
    }

    pub fn tick_excluded(&mut self, reason: ExclusionReason) {
        *self.excluded.entry(reason).or_insert(0) += 1;
    }

    pub fn tick_duplicate(&mut self) {
        self.duplicates += 1;
    }

    /// Total records dropped by the exclusion filter
    pub fn excluded_total(&self) -> u64 {
        self.excluded.values().sum()
    }

    /// One-line progress report
    pub fn report(&self) {
        eprintln!(
            "Read {} lines, generated {} aliases.",
            self.lines_read, self.aliases
        );
    }

    /// Per-reason exclusion breakdown for -c/--summary
    pub fn report_summary(&self) {
        eprintln!("Skipped {} malformed lines.", self.malformed);
        eprintln!("Discarded {} duplicate artifact ids.", self.duplicates);
        eprintln!("Excluded {} records:", self.excluded_total());

        let mut reasons: Vec<(&ExclusionReason, &u64)> = self.excluded.iter().collect();
        reasons.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.label().cmp(b.0.label())));
        for (reason, count) in reasons {
            eprintln!("  {:<14} {}", reason.label(), count);
        }
    }
}
