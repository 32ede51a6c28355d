//! Coordinate record parsing for pipe-delimited input lines
//!
//! Input format: one `<group-id>|<artifact-id>` pair per line. Lines that
//! do not split into exactly two fields are malformed and skipped by
//! policy, never reported as errors.

use thiserror::Error;

/// A line that did not split into exactly two `|`-delimited fields
///
/// This is a policy-skip, not a fatal condition; the builder counts these
/// and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed coordinate line (expected <group-id>|<artifact-id>): {line:?}")]
pub struct MalformedLine {
    /// The offending line after whitespace trimming
    pub line: String,
}

/// A single Maven coordinate pair parsed from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    /// Maven/OSGi namespace identifier (e.g., "org.apache.commons")
    pub group_id: String,
    /// Component name within the group (e.g., "commons-lang")
    pub artifact_id: String,
}

impl Coordinate {
    /// Parse one input line into a coordinate pair.
    ///
    /// The line is trimmed as a whole before splitting; the individual
    /// fields are taken as-is, matching the upstream dump format.
    pub fn from_line(line: &str) -> Result<Self, MalformedLine> {
        let trimmed = line.trim();
        let fields: Vec<&str> = trimmed.split('|').collect();

        if fields.len() != 2 {
            return Err(MalformedLine {
                line: trimmed.to_string(),
            });
        }

        Ok(Self {
            group_id: fields[0].to_string(),
            artifact_id: fields[1].to_string(),
        })
    }
}
