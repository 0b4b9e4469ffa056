//! DML statement kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of data-manipulation statement to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DmlKind {
    /// `INSERT INTO ... VALUES (...)`
    Insert,
    /// `UPDATE ... SET ... WHERE <primary key>`
    Update,
    /// `DELETE FROM ... WHERE <primary key>`
    Delete,
}

impl DmlKind {
    /// All supported kinds, in the order they are listed in error messages.
    pub const ALL: [DmlKind; 3] = [DmlKind::Insert, DmlKind::Update, DmlKind::Delete];

    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DmlKind::Insert => "insert",
            DmlKind::Update => "update",
            DmlKind::Delete => "delete",
        }
    }
}

impl fmt::Display for DmlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown DML kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dml '{0}', expected one of: insert, update, delete")]
pub struct ParseDmlKindError(pub String);

impl FromStr for DmlKind {
    type Err = ParseDmlKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DmlKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDmlKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("insert".parse::<DmlKind>().unwrap(), DmlKind::Insert);
        assert_eq!("UPDATE".parse::<DmlKind>().unwrap(), DmlKind::Update);
        assert_eq!(" delete ".parse::<DmlKind>().unwrap(), DmlKind::Delete);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "upsert".parse::<DmlKind>().unwrap_err();
        assert_eq!(err, ParseDmlKindError("upsert".to_string()));
        assert!(err.to_string().contains("insert, update, delete"));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in DmlKind::ALL {
            assert_eq!(kind.to_string().parse::<DmlKind>().unwrap(), kind);
        }
    }
}
