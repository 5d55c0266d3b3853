use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Bucket identifier partitioning storage by record kind.
///
/// The lower-case name doubles as the collection key on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Users,
    Songs,
    Playlists,
}

impl Scope {
    /// Every scope, in output order.
    pub const ALL: [Scope; 3] = [Scope::Users, Scope::Songs, Scope::Playlists];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Users => "users",
            Scope::Songs => "songs",
            Scope::Playlists => "playlists",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Malformed record in '{scope}': {source}")]
    Malformed {
        scope: Scope,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record in '{scope}': field '{field}' is empty")]
    Invalid { scope: Scope, field: &'static str },
}

/// A record type stored in exactly one scope.
pub trait ScopedRecord: Serialize + DeserializeOwned {
    const SCOPE: Scope;

    /// Checks the constraints the type system can't express.
    fn validate(&self) -> Result<(), RecordError>;

    /// Decodes a raw record field by field. Missing, mistyped and unknown
    /// fields are all rejected.
    fn from_raw(raw: &Value) -> Result<Self, RecordError> {
        let record = Self::deserialize(raw).map_err(|source| RecordError::Malformed {
            scope: Self::SCOPE,
            source,
        })?;
        record.validate()?;
        Ok(record)
    }
}

fn require(scope: Scope, field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.is_empty() {
        return Err(RecordError::Invalid { scope, field });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl ScopedRecord for User {
    const SCOPE: Scope = Scope::Users;

    fn validate(&self) -> Result<(), RecordError> {
        require(Self::SCOPE, "id", &self.id)?;
        require(Self::SCOPE, "name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Song {
    pub id: String,
    pub artist: String,
    pub title: String,
}

impl ScopedRecord for Song {
    const SCOPE: Scope = Scope::Songs;

    fn validate(&self) -> Result<(), RecordError> {
        require(Self::SCOPE, "id", &self.id)?;
        require(Self::SCOPE, "artist", &self.artist)?;
        require(Self::SCOPE, "title", &self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Playlist {
    pub id: String,
    pub user_id: String,
    pub song_ids: Vec<String>,
}

impl Playlist {
    /// The id as a number, if it is one. Used to allocate new playlist ids.
    pub fn numeric_id(&self) -> Option<NumericId<'_>> {
        NumericId::parse(&self.id)
    }
}

/// An id made only of ASCII digits, compared by value at any length.
///
/// Leading zeros are dropped, so `"007"` and `"7"` are the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId<'a>(&'a str);

impl<'a> NumericId<'a> {
    pub fn parse(id: &'a str) -> Option<Self> {
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match id.trim_start_matches('0') {
            "" => Some(NumericId("0")),
            digits => Some(NumericId(digits)),
        }
    }

    /// The decimal string of this number plus one.
    pub fn successor(&self) -> String {
        let mut digits: Vec<u8> = self.0.bytes().collect();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }

        let mut next = String::with_capacity(digits.len() + 1);
        if carry {
            next.push('1');
        }
        next.extend(digits.into_iter().map(char::from));
        next
    }
}

impl Ord for NumericId<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for NumericId<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl ScopedRecord for Playlist {
    const SCOPE: Scope = Scope::Playlists;

    // Field types already carry the whole contract: two strings and a list.
    fn validate(&self) -> Result<(), RecordError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    User(User),
    Song(Song),
    Playlist(Playlist),
}

impl Record {
    /// Builds the record variant responsible for `scope` from a raw value.
    pub fn from_raw(scope: Scope, raw: &Value) -> Result<Self, RecordError> {
        match scope {
            Scope::Users => User::from_raw(raw).map(Record::User),
            Scope::Songs => Song::from_raw(raw).map(Record::Song),
            Scope::Playlists => Playlist::from_raw(raw).map(Record::Playlist),
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Record::User(_) => User::SCOPE,
            Record::Song(_) => Song::SCOPE,
            Record::Playlist(_) => Playlist::SCOPE,
        }
    }
}
