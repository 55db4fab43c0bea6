//! Loading routing rules from a YAML or TOML document.
//!
//! The path must be absolute (after `~` expansion) and must exist; both are
//! checked before the file is read. Parsing then validates every rule entry
//! so no router is ever built from a partially understood document.

mod structs;

pub use structs::ConfigFile;

use crate::error::{Error, ParseProblem, PathProblem};
use crate::level::Level;
use crate::router::Rule;
use std::fs;
use std::path::{Path, PathBuf};

/// Document syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    /// `.toml` and `.conf` are TOML; everything else is read as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("toml" | "conf") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// A validated config document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamsConfig {
    /// Where the rules came from, for error messages and diagnostics.
    pub path: PathBuf,
    pub rules: Vec<Rule>,
    /// Set when the document carries its own `fallback_level`.
    pub fallback_level: Option<Level>,
}

impl StreamsConfig {
    /// Reads, parses, and validates the document at `path`.
    ///
    /// # Errors
    /// [`Error::ConfigPath`] for a relative or missing path, and
    /// [`Error::ConfigParse`] naming the path for unreadable or malformed files.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = check_path(path.as_ref())?;
        let content = fs::read_to_string(&path).map_err(|e| {
            Error::parse(
                path.display().to_string(),
                ParseProblem::Syntax(e.to_string()),
            )
        })?;
        Self::parse(&content, Format::from_path(&path), path)
    }

    /// Parses an in-memory document as if it had been read from `path`.
    ///
    /// # Errors
    /// [`Error::ConfigParse`] naming `path` when the document is malformed.
    pub fn parse(content: &str, format: Format, path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let source = path.display().to_string();

        let file: ConfigFile = match format {
            Format::Yaml => serde_yaml_ng::from_str(content)
                .map_err(|e| Error::parse(&source, ParseProblem::Syntax(e.to_string())))?,
            Format::Toml => toml::from_str(content)
                .map_err(|e| Error::parse(&source, ParseProblem::Syntax(e.to_string())))?,
        };

        if file.default_level.is_some() {
            return Err(Error::parse(
                &source,
                ParseProblem::UnsupportedOption("default_level"),
            ));
        }

        let Some(streams) = file.streams else {
            return Err(Error::parse(&source, ParseProblem::MissingStreams));
        };

        let rules = streams
            .iter()
            .enumerate()
            .map(|(index, raw)| raw.validate(index, &source))
            .collect::<Result<Vec<_>, _>>()?;

        let fallback_level = file
            .fallback_level
            .map(|level| {
                level.parse::<Level>().map_err(|e| {
                    Error::parse(
                        &source,
                        ParseProblem::Syntax(format!("fallback_level: {e}")),
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            path,
            rules,
            fallback_level,
        })
    }

    /// Name used as the error source for this document's rules.
    #[must_use]
    pub fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Expands a leading `~`, then requires an absolute path that exists.
///
/// # Errors
/// [`Error::ConfigPath`] with the offending (expanded) path.
pub fn check_path(path: &Path) -> Result<PathBuf, Error> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());

    if !expanded.is_absolute() {
        return Err(Error::ConfigPath {
            path: expanded,
            problem: PathProblem::NotAbsolute,
        });
    }
    if !expanded.exists() {
        return Err(Error::ConfigPath {
            path: expanded,
            problem: PathProblem::NotFound,
        });
    }

    Ok(expanded)
}
