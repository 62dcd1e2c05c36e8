//! Roster data representations.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod request;
pub mod response;
pub mod user;

pub use user::{RawUser, Uid, User};

/// A loosely typed record identifier.
///
/// The users API emits numeric ids and string uids, but nothing holds either
/// field to its type. Any JSON value is accepted so a single odd record
/// cannot fail a whole batch.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    String(String),
    Other(Value),
}

impl Id {
    /// Renders the id as a list key.
    ///
    /// Returns `None` for ids that cannot identify anything: `null`,
    /// `false`, zero and the empty string.
    pub fn to_key(&self) -> Option<String> {
        match self {
            Id::Number(0) => None,
            Id::Number(id) => Some(id.to_string()),
            Id::String(id) if id.is_empty() => None,
            Id::String(id) => Some(id.clone()),
            Id::Other(Value::Null | Value::Bool(false)) => None,
            Id::Other(Value::Number(id)) if id.as_f64() == Some(0.0) => None,
            Id::Other(id) => Some(id.to_string()),
        }
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::String(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::String(value.to_owned())
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Number(value)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(id) => id.fmt(f),
            Id::String(id) => id.fmt(f),
            Id::Other(id) => id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_numbers_and_strings() {
        let id: Id = serde_json::from_str("4312").unwrap();
        assert_eq!(id, Id::Number(4312));

        let id: Id = serde_json::from_str("\"x-9\"").unwrap();
        assert_eq!(id, Id::String("x-9".into()));
    }

    #[test]
    fn falsy_ids_have_no_key() {
        assert_eq!(Id::Number(0).to_key(), None);
        assert_eq!(Id::String(String::new()).to_key(), None);
        assert_eq!(Id::Other(Value::Null).to_key(), None);
        assert_eq!(Id::Other(Value::Bool(false)).to_key(), None);
        assert_eq!(Id::Number(7).to_key().as_deref(), Some("7"));
    }

    #[test]
    fn odd_ids_still_make_keys() {
        let id: Id = serde_json::from_str("2.5").unwrap();
        assert_eq!(id.to_key().as_deref(), Some("2.5"));

        let id: Id = serde_json::from_str("true").unwrap();
        assert_eq!(id.to_key().as_deref(), Some("true"));

        let id: Id = serde_json::from_str("0.0").unwrap();
        assert_eq!(id.to_key(), None);
    }
}
