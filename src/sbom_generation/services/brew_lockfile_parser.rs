use crate::ports::outbound::LockfileReader;
use crate::sbom_generation::domain::{BrewLockfile, Dependency, OsFamily};
use crate::shared::error::SbomError;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Prefixes that internal taps put in front of formula names
const FORMULA_PREFIXES: [&str; 2] = ["github/bootstrap/", "github/packages/"];

#[derive(Debug, Deserialize)]
struct RawLockfile {
    #[serde(default)]
    system: Option<RawSystem>,
    entries: RawEntries,
}

#[derive(Debug, Deserialize)]
struct RawSystem {
    #[serde(default)]
    macos: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawEntries {
    #[serde(default)]
    brew: Option<IndexMap<String, RawEntry>>,
    #[serde(default)]
    formula: Option<IndexMap<String, RawEntry>>,
    #[serde(default)]
    cask: Option<IndexMap<String, RawEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    version: Option<String>,
}

/// Parser for `Brewfile.lock.json` files written by `brew bundle`
///
/// Extracts only the documented fields: `system.macos` and the `brew`,
/// `formula` and `cask` maps under `entries`.
pub struct BrewLockfileParser;

impl BrewLockfileParser {
    /// Reads the lockfile at `path` through `reader`, then parses it
    ///
    /// # Errors
    /// - `SbomError::LockfileNotFound` when the file does not exist
    /// - `SbomError::LockfileParseError` for invalid JSON or a missing
    ///   `entries` object
    pub fn parse_file<R: LockfileReader>(reader: &R, path: &Path) -> Result<BrewLockfile> {
        let content = reader.read_lockfile(path)?;
        Self::parse(&content, path)
    }

    /// Parses lockfile content; `source` is only used in error messages
    pub fn parse(content: &str, source: &Path) -> Result<BrewLockfile> {
        let parse_error = |details: String| SbomError::LockfileParseError {
            path: source.to_path_buf(),
            details,
        };

        let lockfile: RawLockfile =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let os_family = match lockfile.system.and_then(|s| s.macos) {
            Some(ref value) if is_truthy(value) => OsFamily::MacOs,
            _ => OsFamily::Debian,
        };

        let formulae: Vec<(String, RawEntry)> = lockfile
            .entries
            .brew
            .into_iter()
            .chain(lockfile.entries.formula)
            .flatten()
            .collect();
        let casks = lockfile.entries.cask.unwrap_or_default();
        let mut dependencies = Vec::with_capacity(formulae.len() + casks.len());

        for (key, entry) in formulae {
            let name = normalize_formula_name(&key);
            let dependency = Dependency::brew(name, entry.version)
                .map_err(|e| parse_error(format!("formula entry '{}': {}", key, e)))?;
            dependencies.push(dependency);
        }

        for (key, entry) in casks {
            let dependency = Dependency::brew(key.as_str(), entry.version)
                .map_err(|e| parse_error(format!("cask entry '{}': {}", key, e)))?;
            dependencies.push(dependency);
        }

        Ok(BrewLockfile::new(os_family, dependencies))
    }
}

/// Drops any `@<pin>` suffix, then the internal tap prefixes
fn normalize_formula_name(key: &str) -> &str {
    let name = key.split_once('@').map_or(key, |(name, _)| name);
    FORMULA_PREFIXES
        .iter()
        .fold(name, |name, prefix| name.strip_prefix(prefix).unwrap_or(name))
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::FileSystemReader;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<BrewLockfile> {
        BrewLockfileParser::parse(content, Path::new("Brewfile.lock.json"))
    }

    fn triples(lockfile: &BrewLockfile) -> Vec<(String, String, Option<String>)> {
        lockfile
            .dependencies()
            .iter()
            .map(|d| {
                (
                    d.manager().to_string(),
                    d.name().to_string(),
                    d.version().map(str::to_string),
                )
            })
            .collect()
    }

    #[test]
    fn test_parse_reference_lockfile() {
        let content = r#"{"system":{"macos":true},"entries":{"brew":{"foo@1.0":{"version":"1.0"},"github/packages/bar":{"version":"2.0"}},"cask":{"baz":{"version":"3.0"}}}}"#;

        let lockfile = parse(content).unwrap();

        assert_eq!(lockfile.os_family(), OsFamily::MacOs);
        assert_eq!(
            triples(&lockfile),
            vec![
                ("brew".to_string(), "foo".to_string(), Some("1.0".to_string())),
                ("brew".to_string(), "bar".to_string(), Some("2.0".to_string())),
                ("brew".to_string(), "baz".to_string(), Some("3.0".to_string())),
            ]
        );
    }

    #[test]
    fn test_formula_name_normalization() {
        assert_eq!(normalize_formula_name("foo@1.2"), "foo");
        assert_eq!(normalize_formula_name("github/bootstrap/bar"), "bar");
        assert_eq!(normalize_formula_name("github/packages/baz@3"), "baz");
        assert_eq!(normalize_formula_name("python@3.12"), "python");
        assert_eq!(normalize_formula_name("homebrew/core/wget"), "homebrew/core/wget");
        assert_eq!(normalize_formula_name("plain"), "plain");
    }

    #[test]
    fn test_cask_names_are_not_normalized() {
        let content = r#"{"entries":{"cask":{"temurin@17":{"version":"17.0.9"},"github/packages/tool":{"version":"1"}}}}"#;

        let lockfile = parse(content).unwrap();
        let names: Vec<&str> = lockfile.dependencies().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["temurin@17", "github/packages/tool"]);
    }

    #[test]
    fn test_formulae_come_before_casks_in_file_order() {
        let content = r#"{"entries":{"cask":{"zeta":{"version":"1"}},"brew":{"zsh":{"version":"5.9"},"awk":{"version":"2"},"make":{"version":"4"}}}}"#;

        let lockfile = parse(content).unwrap();
        let names: Vec<&str> = lockfile.dependencies().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["zsh", "awk", "make", "zeta"]);
    }

    #[test]
    fn test_count_matches_formula_plus_cask_entries() {
        let content = r#"{"entries":{"brew":{"a":{"version":"1"},"a@2":{"version":"2"},"b":{}},"cask":{"c":{"version":"1"},"d":{"version":"1"}}}}"#;

        let lockfile = parse(content).unwrap();
        assert_eq!(lockfile.dependencies().len(), 5);
        // "a" and "a@2" both normalize to "a"; duplicates are kept
        assert_eq!(lockfile.dependencies()[0].name(), "a");
        assert_eq!(lockfile.dependencies()[1].name(), "a");
    }

    #[test]
    fn test_missing_version_is_none() {
        let content = r#"{"entries":{"brew":{"jq":{"bottle":false}}}}"#;

        let lockfile = parse(content).unwrap();
        assert_eq!(lockfile.dependencies()[0].version(), None);
    }

    #[test]
    fn test_formula_alias_section() {
        let content = r#"{"entries":{"formula":{"git":{"version":"2.43.0"}}}}"#;

        let lockfile = parse(content).unwrap();
        assert_eq!(lockfile.dependencies().len(), 1);
        assert_eq!(lockfile.dependencies()[0].name(), "git");
    }

    #[test]
    fn test_brew_and_formula_sections_are_both_read() {
        let content = r#"{"entries":{"formula":{"b":{"version":"2"}},"brew":{"a":{"version":"1"}},"cask":{"c":{"version":"3"}}}}"#;

        let lockfile = parse(content).unwrap();
        let names: Vec<&str> = lockfile.dependencies().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_sections_yield_no_entries() {
        let lockfile = parse(r#"{"entries":{}}"#).unwrap();
        assert!(lockfile.dependencies().is_empty());
        assert_eq!(lockfile.os_family(), OsFamily::Debian);

        let lockfile = parse(r#"{"entries":{"tap":{"homebrew/core":{}}}}"#).unwrap();
        assert!(lockfile.dependencies().is_empty());
    }

    #[test]
    fn test_os_family_follows_macos_truthiness() {
        let macos_object =
            r#"{"system":{"macos":{"sonoma":{"HOMEBREW_VERSION":"4.2.0"}}},"entries":{}}"#;
        assert_eq!(parse(macos_object).unwrap().os_family(), OsFamily::MacOs);

        let macos_false = r#"{"system":{"macos":false},"entries":{}}"#;
        assert_eq!(parse(macos_false).unwrap().os_family(), OsFamily::Debian);

        let linux = r#"{"system":{"linux":{"ubuntu":{}}},"entries":{}}"#;
        assert_eq!(parse(linux).unwrap().os_family(), OsFamily::Debian);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse("{not json").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::LockfileParseError { .. })
        ));
    }

    #[test]
    fn test_missing_entries_is_parse_error() {
        let err = parse(r#"{"system":{"macos":true}}"#).unwrap_err();
        match err.downcast_ref::<SbomError>() {
            Some(SbomError::LockfileParseError { path, details }) => {
                assert_eq!(path, &PathBuf::from("Brewfile.lock.json"));
                assert!(details.contains("entries"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_object_entry_is_parse_error() {
        let err = parse(r#"{"entries":{"brew":{"jq":"1.7"}}}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::LockfileParseError { .. })
        ));
    }

    #[test]
    fn test_top_level_array_is_parse_error() {
        assert!(parse("[]").is_err());
    }

    #[test]
    fn test_key_that_normalizes_to_empty_name_is_parse_error() {
        let err = parse(r#"{"entries":{"brew":{"@1.0":{"version":"1.0"}}}}"#).unwrap_err();
        match err.downcast_ref::<SbomError>() {
            Some(SbomError::LockfileParseError { details, .. }) => {
                assert!(details.contains("formula entry '@1.0'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_reads_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Brewfile.lock.json");
        fs::write(&path, r#"{"entries":{"brew":{"wget":{"version":"1.21.4"}}}}"#).unwrap();

        let lockfile = BrewLockfileParser::parse_file(&FileSystemReader::new(), &path).unwrap();

        assert_eq!(lockfile.dependencies()[0].name(), "wget");
    }

    #[test]
    fn test_parse_file_missing_path_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = BrewLockfileParser::parse_file(
            &FileSystemReader::new(),
            &temp_dir.path().join("Brewfile.lock.json"),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::LockfileNotFound { .. })
        ));
    }
}
