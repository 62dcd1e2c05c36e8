//! User records.

use derive_more::{AsRef, Deref, Display, From, Into};

use rand::distr::{Alphanumeric, SampleString as _};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Id;

/// The length of synthesized fallback keys.
pub const FALLBACK_KEY_LEN: usize = 16;

/// A list key.
///
/// Keys come from the API where possible. Records that arrive without one get
/// a random key, assigned once when the record is ingested.
#[derive(
    Clone, Debug, Display, PartialEq, Eq, Hash, Deserialize, Serialize, Deref, AsRef, From, Into,
)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    /// Generates a random fallback key.
    pub fn random() -> Uid {
        Uid(Alphanumeric.sample_string(&mut rand::rng(), FALLBACK_KEY_LEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A user record exactly as the API returns it.
///
/// Every consumed field is optional; a `null` or missing field is tolerated
/// here and defaulted during ingestion.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RawUser {
    /// The stable identifier of the record.
    ///
    /// Usually a string, but any type is tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Id>,
    /// The numeric identifier of the record, used as a key when `uid` is
    /// missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The avatar image url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Everything else the API sent along.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single ingested user.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct User {
    /// The list key of the user.
    pub uid: Uid,
    /// The API's numeric id, if there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub first_name: String,
    pub last_name: String,
    /// The avatar image url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Opaque fields carried through from the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// The key used to identify this user in a list.
    pub fn key(&self) -> &Uid {
        &self.uid
    }

    /// The user's first and last name, joined by a space.
    ///
    /// Missing halves are skipped.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// The initials of the user, used when no avatar is available.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        let uid = raw
            .uid
            .as_ref()
            .and_then(Id::to_key)
            .or_else(|| raw.id.as_ref().and_then(Id::to_key))
            .map(Uid)
            .unwrap_or_else(Uid::random);

        User {
            uid,
            id: raw.id,
            first_name: raw.first_name.unwrap_or_default(),
            last_name: raw.last_name.unwrap_or_default(),
            avatar: raw.avatar.filter(|avatar| !avatar.is_empty()),
            extra: raw.extra,
        }
    }
}
