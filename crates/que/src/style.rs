//! Parameter styles.
//!
//! A [`ParamStyle`] decides two things at render time: what a placeholder
//! looks like in the SQL text, and whether the parameters come back as an
//! ordered sequence or as a name-keyed mapping. The names follow the DB-API
//! `paramstyle` vocabulary so they can be read from configuration.

use crate::error::QueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder and parameter-container convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ParamStyle {
    /// `:1`, `:2`, ... with a sequence of values
    #[default]
    Positional,
    /// `$1`, `$2`, ... with a sequence of values
    Dollar,
    /// `?` with a sequence of values
    Qmark,
    /// `%s` with a sequence of values
    Format,
    /// `:name` with a mapping of values
    Name,
    /// `%(name)s` with a mapping of values
    PyFormat,
}

/// How a style identifies its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Placeholders carry an increasing number.
    Numbered,
    /// Placeholders are all alike; order alone matches values.
    Anonymous,
    /// Placeholders carry a name; values are keyed by it.
    Named,
}

impl ParamStyle {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamStyle::Positional | ParamStyle::Dollar => ParamKind::Numbered,
            ParamStyle::Qmark | ParamStyle::Format => ParamKind::Anonymous,
            ParamStyle::Name | ParamStyle::PyFormat => ParamKind::Named,
        }
    }

    /// Whether parameters are returned as a mapping.
    pub fn is_named(&self) -> bool {
        self.kind() == ParamKind::Named
    }

    /// The configuration name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamStyle::Positional => "positional",
            ParamStyle::Dollar => "dollar",
            ParamStyle::Qmark => "qmark",
            ParamStyle::Format => "format",
            ParamStyle::Name => "name",
            ParamStyle::PyFormat => "pyformat",
        }
    }

    /// Placeholder for the `index`-th parameter (numbered styles).
    pub(crate) fn numbered(&self, index: usize) -> String {
        match self {
            ParamStyle::Dollar => format!("${index}"),
            _ => format!(":{index}"),
        }
    }

    /// Placeholder for the parameter keyed `name` (named styles).
    pub(crate) fn named(&self, name: &str) -> String {
        match self {
            ParamStyle::PyFormat => format!("%({name})s"),
            _ => format!(":{name}"),
        }
    }

    /// Placeholder for anonymous styles.
    pub(crate) fn anonymous(&self) -> &'static str {
        match self {
            ParamStyle::Format => "%s",
            _ => "?",
        }
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamStyle {
    type Err = QueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" | "numeric" => Ok(ParamStyle::Positional),
            "dollar" => Ok(ParamStyle::Dollar),
            "qmark" => Ok(ParamStyle::Qmark),
            "format" => Ok(ParamStyle::Format),
            "name" | "named" => Ok(ParamStyle::Name),
            "pyformat" => Ok(ParamStyle::PyFormat),
            _ => Err(QueError::UnsupportedStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for ParamStyle {
    type Error = QueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ParamStyle> for &'static str {
    fn from(style: ParamStyle) -> Self {
        style.as_str()
    }
}
