//! Configuration file loading and setting resolution
//!
//! Settings come from an optional `ktags.toml`; command-line flags override
//! anything the file sets.
//!
//! ```toml
//! kinds = "cft"
//! format = "json"
//! max_depth = 8
//! exclude = ["generated"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cli::{Cli, OutputFormat};
use crate::error::{KtagsError, Result};
use crate::tag::TagKind;

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "ktags.toml";

const DEFAULT_MAX_DEPTH: usize = 32;

/// Contents of a configuration file
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub kinds: Option<String>,
    pub format: Option<OutputFormat>,
    pub max_depth: Option<usize>,
    pub exclude: Vec<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| KtagsError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&text, path)
    }

    /// Load `dir/ktags.toml` if it exists
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| KtagsError::Config {
            path: origin.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Effective settings after merging file and command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub kinds: Vec<TagKind>,
    pub max_depth: usize,
    pub exclude: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            kinds: TagKind::ALL.to_vec(),
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: Vec::new(),
        }
    }
}

impl Settings {
    pub fn resolve(cli: &Cli, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Settings::default();

        let kinds = match cli.kinds.as_deref().or(file.kinds.as_deref()) {
            Some(selection) => parse_kinds(selection)?,
            None => defaults.kinds,
        };

        Ok(Self {
            format: cli.format.or(file.format).unwrap_or(defaults.format),
            kinds,
            max_depth: cli.max_depth.or(file.max_depth).unwrap_or(defaults.max_depth),
            exclude: file.exclude,
        })
    }
}

/// Parse a kind selection: either letters (`cfC`) or comma-separated names
/// (`class,function`).
pub fn parse_kinds(selection: &str) -> Result<Vec<TagKind>> {
    let invalid = |message: String| KtagsError::InvalidKinds {
        selection: selection.to_string(),
        message,
    };

    let trimmed = selection.trim();
    if trimmed.is_empty() {
        return Err(invalid("no kinds selected".to_string()));
    }

    let mut kinds = Vec::new();
    let by_name = trimmed.contains(',') || TagKind::parse(trimmed).is_some();
    if by_name {
        for name in trimmed.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let kind = TagKind::parse(name)
                .ok_or_else(|| invalid(format!("unknown kind '{}'", name)))?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    } else {
        for letter in trimmed.chars() {
            let kind = TagKind::ALL
                .into_iter()
                .find(|k| k.letter() == letter)
                .ok_or_else(|| invalid(format!("unknown kind letter '{}'", letter)))?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }

    Ok(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_kind_letters() {
        assert_eq!(parse_kinds("cC").unwrap(), vec![TagKind::Class, TagKind::Const]);
        assert_eq!(parse_kinds("ff").unwrap(), vec![TagKind::Function]);
        assert!(parse_kinds("cx").is_err());
    }

    #[test]
    fn test_parse_kind_names() {
        assert_eq!(
            parse_kinds("typealias, function").unwrap(),
            vec![TagKind::TypeAlias, TagKind::Function]
        );
        assert_eq!(parse_kinds("const").unwrap(), vec![TagKind::Const]);
        assert!(parse_kinds("class,method").is_err());
        assert!(parse_kinds("  ").is_err());
    }

    #[test]
    fn test_file_config_parse() {
        let text = "kinds = \"cf\"\nformat = \"toon\"\nmax_depth = 3\nexclude = [\"gen\"]\n";
        let config = FileConfig::parse(text, Path::new("ktags.toml")).unwrap();
        assert_eq!(config.kinds.as_deref(), Some("cf"));
        assert_eq!(config.format, Some(OutputFormat::Toon));
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.exclude, vec!["gen".to_string()]);
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        let err = FileConfig::parse("colour = true\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, KtagsError::Config { .. }));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::try_parse_from(["ktags", "-k", "t", "src"]).unwrap();
        let file = FileConfig {
            kinds: Some("cf".to_string()),
            format: Some(OutputFormat::Json),
            max_depth: Some(2),
            exclude: vec!["gen".to_string()],
        };
        let settings = Settings::resolve(&cli, Some(file)).unwrap();
        assert_eq!(settings.kinds, vec![TagKind::TypeAlias]);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.max_depth, 2);
        assert_eq!(settings.exclude, vec!["gen".to_string()]);
    }

    #[test]
    fn test_defaults_without_file() {
        let cli = Cli {
            paths: vec![PathBuf::from("src")],
            format: None,
            kinds: None,
            max_depth: None,
            config: None,
            output: None,
            list_kinds: false,
            list_extensions: false,
            verbose: false,
        };
        assert_eq!(Settings::resolve(&cli, None).unwrap(), Settings::default());
    }
}
