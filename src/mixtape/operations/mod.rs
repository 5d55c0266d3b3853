//! # Operations
//!
//! An operation is one state transition over [`Storage`]. The set of
//! operations is closed: [`OperationKind`] is decoded from the `optype` tag of
//! an operation definition, and every place that acts on an operation matches
//! it exhaustively.
//!
//! ## Lifecycle
//!
//! ```text
//! Created ──validate──▶ Validated(ok) ──apply──▶ Applied
//!    │
//!    └──────validate──▶ Validated(rejected)     (excluded from replay)
//! ```
//!
//! A definition whose fields do not map onto its variant (missing, mistyped
//! or unknown fields) still becomes an [`Operation`] and is rejected at
//! validation. Only an unknown `optype` makes the definition list unreadable.
//!
//! [`OperationQueue::build`] runs validation once and keeps only the accepted
//! operations. Each queued operation is applied at most once, in input order.
//!
//! ## Failures
//!
//! Neither validation nor application ever fails a run. Failures are recorded
//! on the operation itself ([`Operation::errors`]) and reported by the caller;
//! a failed `apply` leaves storage untouched, and replay moves on to the next
//! operation.
//!
//! Each variant lives in its own module and only knows how to check and apply
//! itself:
//!
//! - [`add_song`]: append an existing song to an existing playlist
//! - [`add_playlist`]: create a playlist for a user from a list of songs
//! - [`remove_playlist`]: delete a playlist by id

use crate::error::MixtapeError;
use crate::store::Storage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod add_playlist;
pub mod add_song;
pub mod remove_playlist;

pub use add_playlist::{AddPlaylist, PayloadEntry};
pub use add_song::AddSong;
pub use remove_playlist::RemovePlaylist;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Song not found")]
    SongNotFound,

    #[error("Playlist not found")]
    PlaylistNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("No songs were found")]
    NoSongsFound,

    #[error("Payload entry {index} has no song_id")]
    MissingSongId { index: usize },

    #[error("Playlist id is missing")]
    MissingPlaylistId,

    #[error("Invalid definition: {reason}")]
    InvalidDefinition { reason: String },
}

/// A decoded operation, one variant per `optype`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "optype")]
pub enum OperationKind {
    AddSong(AddSong),
    AddPlaylist(AddPlaylist),
    RemovePlaylist(RemovePlaylist),
}

impl OperationKind {
    /// The `optype` this operation was decoded from.
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::AddSong(_) => "AddSong",
            OperationKind::AddPlaylist(_) => "AddPlaylist",
            OperationKind::RemovePlaylist(_) => "RemovePlaylist",
        }
    }
}

/// An operation together with the errors it accumulated.
///
/// The definition it was built from is kept verbatim for diagnostics. When
/// the fields of a definition did not decode, the operation still exists but
/// carries the decode error instead of a kind, and validation rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    optype: String,
    definition: Value,
    kind: Result<OperationKind, OperationError>,
    errors: Vec<OperationError>,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            optype: kind.name().to_string(),
            definition: serde_json::to_value(&kind).unwrap_or_default(),
            kind: Ok(kind),
            errors: Vec::new(),
        }
    }

    /// Decodes one raw operation definition.
    ///
    /// A definition that is not an object, or whose `optype` names no known
    /// operation, is malformed input. The remaining fields are mapped onto
    /// the variant's struct; a missing, mistyped or unknown field does not
    /// fail decoding but makes the operation invalid.
    pub fn from_definition(definition: Value) -> crate::error::Result<Self> {
        let Value::Object(mut fields) = definition.clone() else {
            return Err(MixtapeError::Decode(format!(
                "operation definition must be an object, found {}",
                definition
            )));
        };
        let optype = match fields.remove("optype") {
            Some(Value::String(optype)) => optype,
            _ => {
                return Err(MixtapeError::Decode(format!(
                    "operation definition has no optype: {}",
                    definition
                )))
            }
        };

        let fields = Value::Object(fields);
        let kind = match optype.as_str() {
            "AddSong" => decode_fields(fields).map(OperationKind::AddSong),
            "AddPlaylist" => decode_fields(fields).map(OperationKind::AddPlaylist),
            "RemovePlaylist" => decode_fields(fields).map(OperationKind::RemovePlaylist),
            _ => {
                return Err(MixtapeError::Decode(format!(
                    "unknown optype '{}'",
                    optype
                )))
            }
        };

        Ok(Self {
            optype,
            definition,
            kind,
            errors: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.optype
    }

    pub fn errors(&self) -> &[OperationError] {
        &self.errors
    }

    /// Checks the operation's own fields. A rejection is recorded in
    /// [`Operation::errors`].
    pub fn validate(&mut self) -> bool {
        let checked = match &self.kind {
            Ok(OperationKind::AddSong(op)) => op.validate(),
            Ok(OperationKind::AddPlaylist(op)) => op.validate(),
            Ok(OperationKind::RemovePlaylist(op)) => op.validate(),
            Err(err) => Err(err.clone()),
        };
        self.record(checked)
    }

    /// Applies the operation to `storage`. On failure storage is unchanged and
    /// the error is recorded in [`Operation::errors`].
    pub fn apply(&mut self, storage: &mut Storage) -> bool {
        let applied = match &self.kind {
            Ok(OperationKind::AddSong(op)) => op.apply(storage),
            Ok(OperationKind::AddPlaylist(op)) => op.apply(storage),
            Ok(OperationKind::RemovePlaylist(op)) => op.apply(storage),
            Err(err) => Err(err.clone()),
        };
        self.record(applied)
    }

    fn record(&mut self, outcome: Result<(), OperationError>) -> bool {
        match outcome {
            Ok(()) => true,
            Err(err) => {
                self.errors.push(err);
                false
            }
        }
    }

    /// One diagnostic line for `error`, followed by the operation definition.
    pub fn describe(&self, error: &OperationError) -> String {
        format!(
            "{}. Operation {} failed. {}",
            error,
            self.name(),
            self.definition
        )
    }
}

fn decode_fields<T: DeserializeOwned>(fields: Value) -> Result<T, OperationError> {
    serde_json::from_value(fields).map_err(|err| OperationError::InvalidDefinition {
        reason: err.to_string(),
    })
}

/// Validated operations waiting for replay, in input order.
#[derive(Debug, Clone, Default)]
pub struct OperationQueue {
    operations: Vec<Operation>,
}

impl OperationQueue {
    /// Validates every operation once. Returns the queue of accepted
    /// operations and, separately, the rejected ones.
    pub fn build<I>(operations: I) -> (Self, Vec<Operation>)
    where
        I: IntoIterator<Item = Operation>,
    {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for mut operation in operations {
            if operation.validate() {
                accepted.push(operation);
            } else {
                rejected.push(operation);
            }
        }
        (
            Self {
                operations: accepted,
            },
            rejected,
        )
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Operation> {
        self.operations.iter_mut()
    }
}
