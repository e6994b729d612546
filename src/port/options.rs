//! Option schema and validation shared by all ports
//!
//! A port declares a static table of [`OptionSpec`]s. Values arrive as
//! strings (from `--use-port` specs, config files or the CLI) and are
//! validated against the table before anything is stored.

use crate::error::OptionError;
use std::fmt;

/// Legal values for boolean options
pub const BOOL_VALUES: &[&str] = &["true", "false"];

/// How a validated value is represented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` / `false`, stored as `bool`
    Bool,
    /// One of a fixed set of strings
    Choice,
}

/// Declaration of one port option
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Option name as written by users (e.g. `disableWarning`)
    pub name: &'static str,
    /// Legal (lower-case) values
    pub values: &'static [&'static str],
    /// Human-readable description
    pub description: &'static str,
    pub kind: OptionKind,
}

/// A validated, normalized option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Choice(&'static str),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Choice(s) => write!(f, "{}", s),
        }
    }
}

impl OptionSpec {
    /// Declare a boolean option
    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            values: BOOL_VALUES,
            description,
            kind: OptionKind::Bool,
        }
    }

    /// Declare an enumerated option
    pub const fn choice(
        name: &'static str,
        values: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            values,
            description,
            kind: OptionKind::Choice,
        }
    }

    /// Validate a raw value, ignoring letter case
    pub fn validate(&self, value: &str) -> Result<OptionValue, OptionError> {
        let lowered = value.to_lowercase();
        let Some(&legal) = self.values.iter().find(|v| **v == lowered) else {
            return Err(OptionError::InvalidValue {
                option: self.name.to_string(),
                allowed: self.values.iter().map(|v| v.to_string()).collect(),
                value: value.to_string(),
            });
        };

        Ok(match self.kind {
            OptionKind::Bool => OptionValue::Bool(legal == "true"),
            OptionKind::Choice => OptionValue::Choice(legal),
        })
    }
}

/// Find the spec for `option` and validate `value` against it
pub fn check(
    port: &str,
    schema: &[OptionSpec],
    option: &str,
    value: &str,
) -> Result<OptionValue, OptionError> {
    schema
        .iter()
        .find(|spec| spec.name == option)
        .ok_or_else(|| OptionError::UnknownOption {
            port: port.to_string(),
            option: option.to_string(),
        })?
        .validate(value)
}

/// Parse a `KEY=VALUE` pair
pub fn parse_assignment(s: &str) -> Result<(String, String), OptionError> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| OptionError::Malformed(s.to_string()))?;
    if key.is_empty() {
        return Err(OptionError::Malformed(s.to_string()));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[OptionSpec] = &[
        OptionSpec::boolean("quiet", "Be quiet"),
        OptionSpec::choice("level", &["0", "1", "s"], "Level"),
    ];

    #[test]
    fn boolean_any_case() {
        for (raw, expected) in [("TRUE", true), ("False", false), ("true", true), ("fAlSe", false)] {
            assert_eq!(
                check("p", SCHEMA, "quiet", raw).unwrap(),
                OptionValue::Bool(expected)
            );
        }
    }

    #[test]
    fn choice_normalizes_case() {
        assert_eq!(
            check("p", SCHEMA, "level", "S").unwrap(),
            OptionValue::Choice("s")
        );
    }

    #[test]
    fn illegal_value_reports_option_and_value() {
        let err = check("p", SCHEMA, "level", "9").unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidValue {
                option: "level".to_string(),
                allowed: vec!["0".to_string(), "1".to_string(), "s".to_string()],
                value: "9".to_string(),
            }
        );
    }

    #[test]
    fn unknown_option() {
        let err = check("p", SCHEMA, "loud", "true").unwrap_err();
        assert!(matches!(err, OptionError::UnknownOption { .. }));
    }

    #[test]
    fn parse_assignment_valid() {
        let (k, v) = parse_assignment("optimizationLevel=z").unwrap();
        assert_eq!(k, "optimizationLevel");
        assert_eq!(v, "z");
    }

    #[test]
    fn parse_assignment_invalid() {
        assert!(parse_assignment("disableWarning").is_err());
        assert!(parse_assignment("=true").is_err());
    }

    #[test]
    fn value_display() {
        assert_eq!(OptionValue::Bool(true).to_string(), "true");
        assert_eq!(OptionValue::Choice("g").to_string(), "g");
    }
}
