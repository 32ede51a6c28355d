//! The alias builder pass: read, filter, accumulate, write
//!
//! One linear pass over the input file. The only fatal conditions are
//! failing to open or read the input and failing to write the output;
//! malformed lines and filtered records are counted and skipped.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::alias_map::AliasMap;
use crate::filter;
use crate::record::Coordinate;
use crate::stats::BuildStats;

/// Build the alias map from a pipe-delimited coordinate dump.
pub fn build_alias_map<P: AsRef<Path>>(input: P, stats: &mut BuildStats) -> Result<AliasMap> {
    let path = input.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
    let reader = BufReader::new(file);

    let mut map = AliasMap::with_overrides();

    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Failed to read input file '{}'", path.display()))?;
        stats.tick_line();

        let record = match Coordinate::from_line(&line) {
            Ok(record) => record,
            Err(err) => {
                trace!(%err, "skipping malformed line");
                stats.tick_malformed();
                continue;
            }
        };

        if let Some(reason) = filter::exclusion_reason(&record) {
            debug!(
                group_id = %record.group_id,
                artifact_id = %record.artifact_id,
                reason = reason.label(),
                "excluded record"
            );
            stats.tick_excluded(reason);
            continue;
        }

        if !map.insert_first(record.artifact_id, record.group_id) {
            stats.tick_duplicate();
        }
    }

    stats.aliases = map.len() as u64;
    Ok(map)
}

/// Serialize the map to `output` as sorted, 2-space-indented JSON.
pub fn write_alias_map<P: AsRef<Path>>(map: &AliasMap, output: P) -> Result<()> {
    let path = output.as_ref();
    let json = map.to_json()?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(lines.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builds_map_from_valid_lines() {
        let input = write_input("org.apache.commons|commons-lang\norg.slf4j|slf4j-api\n");
        let mut stats = BuildStats::new();
        let map = build_alias_map(input.path(), &mut stats).unwrap();

        assert_eq!(map.get("commons-lang"), Some("org.apache.commons"));
        assert_eq!(map.get("slf4j-api"), Some("org.slf4j"));
        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.aliases, 3); // two records plus the seeded override
    }

    #[test]
    fn test_malformed_lines_are_counted_not_fatal() {
        let input = write_input("org.foo\norg.apache.commons|commons-lang\na|b|c\n");
        let mut stats = BuildStats::new();
        let map = build_alias_map(input.path(), &mut stats).unwrap();

        assert_eq!(stats.malformed, 2);
        assert_eq!(map.get("commons-lang"), Some("org.apache.commons"));
    }

    #[test]
    fn test_excluded_records_are_counted() {
        let input = write_input("org.eclipse.jdt|jdt\ncom.example.foo|foo-bar\n");
        let mut stats = BuildStats::new();
        let map = build_alias_map(input.path(), &mut stats).unwrap();

        assert_eq!(stats.excluded_total(), 2);
        assert_eq!(map.get("jdt"), None);
        assert_eq!(map.get("foo-bar"), None);
    }

    #[test]
    fn test_first_seen_wins_on_duplicate_artifact() {
        let input = write_input("org.first|shared-core\norg.second|shared-core\n");
        let mut stats = BuildStats::new();
        let map = build_alias_map(input.path(), &mut stats).unwrap();

        assert_eq!(map.get("shared-core"), Some("org.first"));
        assert_eq!(stats.duplicates, 1);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let mut stats = BuildStats::new();
        let result = build_alias_map("/nonexistent/eclipse_artifacts.txt", &mut stats);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("vendor-alias.json");

        let mut map = AliasMap::with_overrides();
        map.insert_first("commons-lang".into(), "org.apache.commons".into());
        write_alias_map(&map, &out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["commons-lang"], "org.apache.commons");
        assert_eq!(parsed["spring.boot"], "org.springframework.boot");
    }
}
