//! # Storage Layer
//!
//! [`Storage`] is the single mutation target of a run: one ordered bucket per
//! [`Scope`], created empty up front and never added to or removed afterwards.
//!
//! ## Design
//!
//! The buckets are typed fields rather than a map from scope to a mixed list.
//! A bucket for every scope therefore always exists, and referencing an
//! unknown scope cannot be expressed. Code that only knows the scope at
//! runtime goes through [`Storage::push`] and [`Storage::len`], which dispatch
//! on the record's own scope.
//!
//! Bucket order is insertion order and is preserved in the output. Lookups are
//! linear scans by id; records are only ever referenced by id, never by a held
//! reference, so removing a record cannot leave anything dangling.
//!
//! ## Output Format
//!
//! `Storage` serializes to the same shape the record source is read from,
//! with one key per scope the storage was created for, in that order:
//!
//! ```text
//! {
//!   "users":     [{"id": "1", "name": "..."}],
//!   "songs":     [{"id": "1", "artist": "...", "title": "..."}],
//!   "playlists": [{"id": "1", "user_id": "1", "song_ids": ["1"]}]
//! }
//! ```

use crate::model::{Playlist, Record, Scope, Song, User};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    scopes: Vec<Scope>,
    users: Vec<User>,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
}

impl Default for Storage {
    fn default() -> Self {
        Self::with_scopes(&Scope::ALL)
    }
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose output only carries `scopes`, in the given order.
    /// Every bucket still exists; the others are just never written.
    pub fn with_scopes(scopes: &[Scope]) -> Self {
        let mut known: Vec<Scope> = Vec::with_capacity(scopes.len());
        for scope in scopes {
            if !known.contains(scope) {
                known.push(*scope);
            }
        }
        Self {
            scopes: known,
            users: Vec::new(),
            songs: Vec::new(),
            playlists: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlists_mut(&mut self) -> &mut Vec<Playlist> {
        &mut self.playlists
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn find_song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    pub fn find_playlist_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|playlist| playlist.id == id)
    }

    /// Appends a record to the bucket of its own scope.
    pub fn push(&mut self, record: Record) {
        match record {
            Record::User(user) => self.users.push(user),
            Record::Song(song) => self.songs.push(song),
            Record::Playlist(playlist) => self.playlists.push(playlist),
        }
    }

    pub fn len(&self, scope: Scope) -> usize {
        match scope {
            Scope::Users => self.users.len(),
            Scope::Songs => self.songs.len(),
            Scope::Playlists => self.playlists.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Scope::ALL.iter().all(|scope| self.len(*scope) == 0)
    }

    /// Next free playlist id: one past the highest numeric id, starting at 1.
    ///
    /// Ids that are not numbers are ignored. Ids of any length are handled.
    pub fn next_playlist_id(&self) -> String {
        self.playlists
            .iter()
            .filter_map(Playlist::numeric_id)
            .max()
            .map(|max| max.successor())
            .unwrap_or_else(|| "1".to_string())
    }
}

impl Serialize for Storage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scopes.len()))?;
        for scope in &self.scopes {
            match scope {
                Scope::Users => map.serialize_entry(scope.as_str(), &self.users)?,
                Scope::Songs => map.serialize_entry(scope.as_str(), &self.songs)?,
                Scope::Playlists => map.serialize_entry(scope.as_str(), &self.playlists)?,
            }
        }
        map.end()
    }
}
