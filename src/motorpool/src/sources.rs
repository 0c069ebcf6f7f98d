//! Input discovery and reading
//!
//! Thin wrappers around the filesystem so the parsing core only ever sees
//! text buffers. A pattern matching nothing is fatal; a single unreadable
//! file is skipped and reported, never fatal.

use glob_match::glob_match;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{Error, Result};

/// One input file's contents, tagged with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub name: String,
    pub text: String,
}

/// A file that could not be read and was skipped.
#[derive(Debug)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub error: Error,
}

/// Sources read for one run.
#[derive(Debug)]
pub struct ReadResult {
    pub sources: Vec<SourceText>,
    pub skipped: Vec<SkippedSource>,
}

/// Expands an input pattern into the matching file paths, sorted by path.
///
/// A pattern without glob metacharacters names a single file. Otherwise the
/// walk starts at the deepest literal prefix directory and keeps every file
/// whose path matches the pattern.
pub fn find_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    if !pattern.contains(['*', '?', '[']) {
        let path = PathBuf::from(pattern);
        if !path.is_file() {
            return Err(Error::NoMatches {
                pattern: pattern.to_string(),
            });
        }
        return Ok(vec![path]);
    }

    let mut matches: Vec<PathBuf> = WalkDir::new(literal_prefix(pattern))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| glob_match(pattern, &e.path().to_string_lossy()))
        .map(|e| e.path().to_path_buf())
        .collect();
    matches.sort();

    if matches.is_empty() {
        return Err(Error::NoMatches {
            pattern: pattern.to_string(),
        });
    }
    Ok(matches)
}

/// Longest leading run of path components free of glob metacharacters.
fn literal_prefix(pattern: &str) -> PathBuf {
    let mut root = PathBuf::new();
    for part in Path::new(pattern).iter() {
        if part.to_string_lossy().contains(['*', '?', '[']) {
            break;
        }
        root.push(part);
    }

    if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root
    }
}

/// Reads every input file in order, skipping unreadable ones.
pub fn read_sources(paths: &[PathBuf]) -> ReadResult {
    let mut result = ReadResult {
        sources: Vec::new(),
        skipped: Vec::new(),
    };

    for path in paths {
        match fs::read_to_string(path) {
            Ok(text) => result.sources.push(SourceText {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string()),
                text,
            }),
            Err(err) => result.skipped.push(SkippedSource {
                path: path.clone(),
                error: err.into(),
            }),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_literal_prefix() {
        assert_eq!(literal_prefix("data/guns/*.lua"), PathBuf::from("data/guns"));
        assert_eq!(literal_prefix("*.lua"), PathBuf::from("."));
        assert_eq!(literal_prefix("/abs/x/*.lua"), PathBuf::from("/abs/x"));
    }

    #[test]
    fn test_single_file_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "guns.lua", "return {};");

        let inputs = find_inputs(path.to_str().unwrap()).unwrap();
        assert_eq!(inputs, vec![path]);
    }

    #[test]
    fn test_glob_pattern_matches_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.lua", "");
        write_file(dir.path(), "a.lua", "");
        write_file(dir.path(), "notes.txt", "");

        let pattern = format!("{}/*.lua", dir.path().display());
        let inputs = find_inputs(&pattern).unwrap();
        assert_eq!(inputs.len(), 2);
        assert!(inputs[0].ends_with("a.lua"));
        assert!(inputs[1].ends_with("b.lua"));
    }

    #[test]
    fn test_no_matches_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.lua", dir.path().display());
        let err = find_inputs(&pattern).unwrap_err();
        assert!(err.to_string().contains("no input files"));

        let missing = dir.path().join("missing.lua");
        assert!(find_inputs(missing.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_read_sources_skips_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(dir.path(), "good.lua", "return {};");
        let missing = dir.path().join("gone.lua");

        let result = read_sources(&[good, missing.clone()]);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].name, "good.lua");
        assert_eq!(result.sources[0].text, "return {};");
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].path, missing);
    }
}
