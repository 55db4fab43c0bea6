//! Ordered pattern→level rules and their compiled, immutable form.

use crate::error::{Error, INLINE_SOURCE, ParseProblem};
use crate::level::Level;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Pattern of the synthetic rule appended after every user rule.
pub const FALLBACK_PATTERN: &str = ".*";

static FALLBACK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FALLBACK_PATTERN).expect("Invalid fallback regex"));

/// A typed routing rule as built in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Regular-expression source, matched unanchored against the stream name.
    pub pattern: String,
    pub level: Level,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, level: Level) -> Self {
        Self {
            pattern: pattern.into(),
            level,
        }
    }
}

impl<P: Into<String>> From<(P, Level)> for Rule {
    fn from((pattern, level): (P, Level)) -> Self {
        Self::new(pattern, level)
    }
}

/// A rule entry as it appears in a config document; both fields are checked during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRule {
    pub pattern: Option<String>,
    pub level: Option<String>,
}

impl RawRule {
    /// Rejects absent or empty fields and unknown level names, naming `source` and the entry index.
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`] describing the first problem found.
    pub fn validate(&self, index: usize, source: &str) -> Result<Rule, Error> {
        let pattern = self
            .pattern
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                Error::parse(
                    source,
                    ParseProblem::MissingField {
                        index,
                        field: "pattern",
                    },
                )
            })?;
        let level = self
            .level
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| {
                Error::parse(
                    source,
                    ParseProblem::MissingField {
                        index,
                        field: "level",
                    },
                )
            })?;
        let level = level.parse::<Level>().map_err(|e| {
            Error::parse(
                source,
                ParseProblem::UnknownLevel {
                    index,
                    level: e.input().to_string(),
                },
            )
        })?;

        Ok(Rule::new(pattern, level))
    }
}

/// A rule whose pattern has been compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    level: Level,
    fallback: bool,
}

impl CompiledRule {
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// True for the synthetic catch-all rule.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn matches(&self, stream: &str) -> bool {
        self.regex.is_match(stream)
    }
}

/// User rules in configured order, followed by the fallback rule.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
    fallback: CompiledRule,
}

impl RuleSet {
    /// Compiles in-memory rules; errors name the `<inline>` source.
    ///
    /// # Errors
    /// Fails if a pattern is empty or is not a valid regular expression.
    pub fn compile(rules: &[Rule], fallback_level: Level) -> Result<Self, Error> {
        Self::compile_from(INLINE_SOURCE, rules, fallback_level)
    }

    /// Same as [`compile`](Self::compile), attributing errors to `source`.
    ///
    /// # Errors
    /// Fails if a pattern is empty or is not a valid regular expression.
    pub fn compile_from(source: &str, rules: &[Rule], fallback_level: Level) -> Result<Self, Error> {
        let rules = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                if rule.pattern.is_empty() {
                    return Err(Error::parse(
                        source,
                        ParseProblem::MissingField {
                            index,
                            field: "pattern",
                        },
                    ));
                }
                let regex = Regex::new(&rule.pattern).map_err(|error| Error::InvalidPattern {
                    source: source.to_string(),
                    pattern: rule.pattern.clone(),
                    error,
                })?;
                Ok(CompiledRule {
                    regex,
                    level: rule.level,
                    fallback: false,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            fallback: fallback_rule(fallback_level),
        })
    }

    /// First rule whose pattern matches wins; the fallback catches everything else.
    #[must_use]
    pub fn resolve(&self, stream: &str) -> &CompiledRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(stream))
            .unwrap_or(&self.fallback)
    }

    #[must_use]
    pub const fn fallback_level(&self) -> Level {
        self.fallback.level
    }

    /// Every rule in match order, fallback last.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }

    /// Number of rules including the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    /// Never true: the fallback rule is always present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

fn fallback_rule(level: Level) -> CompiledRule {
    CompiledRule {
        regex: FALLBACK_REGEX.clone(),
        level,
        fallback: true,
    }
}
