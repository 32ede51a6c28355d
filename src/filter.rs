//! Exclusion heuristics for alias candidates
//!
//! An artifact id only makes a useful alias when it is hyphenated,
//! all-lowercase, and distinct from its group id. Docs, test, sample,
//! example and incubating coordinates are dropped as noise.

use crate::record::Coordinate;

/// Why a coordinate record was excluded from the alias map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    /// Artifact id contains no `-`; single-word names (e.g., "jdt") are
    /// too generic to alias safely
    NoHyphen,
    /// Group id and artifact id are identical, the alias would be a no-op
    SameAsGroup,
    /// Documentation artifact (`docs` substring in the artifact id)
    Docs,
    /// Incubating artifact, not yet a stable coordinate
    Incubating,
    /// Example coordinate (`example` in either field)
    Example,
    /// Test coordinate (`test` in either field)
    Test,
    /// Artifact id contains uppercase characters
    NotLowercase,
    /// Sample coordinate (`sample` in either field)
    Sample,
}

impl ExclusionReason {
    /// Short label for summary output
    pub fn label(&self) -> &'static str {
        match self {
            ExclusionReason::NoHyphen => "no hyphen",
            ExclusionReason::SameAsGroup => "same as group",
            ExclusionReason::Docs => "docs",
            ExclusionReason::Incubating => "incubating",
            ExclusionReason::Example => "example",
            ExclusionReason::Test => "test",
            ExclusionReason::NotLowercase => "not lowercase",
            ExclusionReason::Sample => "sample",
        }
    }
}

/// Check a record against the exclusion heuristics.
///
/// Returns the first matching reason, or `None` when the record should be
/// kept. Checks run in a fixed order so reason attribution is stable.
pub fn exclusion_reason(record: &Coordinate) -> Option<ExclusionReason> {
    let group = record.group_id.as_str();
    let artifact = record.artifact_id.as_str();

    if !artifact.contains('-') {
        return Some(ExclusionReason::NoHyphen);
    }
    if group == artifact {
        return Some(ExclusionReason::SameAsGroup);
    }
    if artifact.contains("docs") {
        return Some(ExclusionReason::Docs);
    }
    if artifact.contains("incubating") {
        return Some(ExclusionReason::Incubating);
    }
    if group.contains("example") || artifact.contains("example") {
        return Some(ExclusionReason::Example);
    }
    if group.contains("test") {
        return Some(ExclusionReason::Test);
    }
    if artifact.to_lowercase() != artifact {
        return Some(ExclusionReason::NotLowercase);
    }
    if group.contains("sample") || artifact.contains("sample") {
        return Some(ExclusionReason::Sample);
    }
    if artifact.contains("test") {
        return Some(ExclusionReason::Test);
    }

    None
}

/// Check if a record survives the exclusion filter
pub fn keeps(record: &Coordinate) -> bool {
    exclusion_reason(record).is_none()
}
