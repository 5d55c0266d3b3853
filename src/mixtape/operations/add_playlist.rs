use super::OperationError;
use crate::model::Playlist;
use crate::store::Storage;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_id: Option<String>,
}

/// Creates a new playlist for a user out of the payload's songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddPlaylist {
    pub user_id: String,
    pub payload: Vec<PayloadEntry>,
}

impl AddPlaylist {
    /// Every payload entry must name a song.
    pub fn validate(&self) -> Result<(), OperationError> {
        match self.payload.iter().position(|entry| entry.song_id.is_none()) {
            Some(index) => Err(OperationError::MissingSongId { index }),
            None => Ok(()),
        }
    }

    /// The new playlist lists the matched songs in songs-bucket order, not
    /// payload order. Payload ids that match no song are dropped.
    pub fn apply(&self, storage: &mut Storage) -> Result<(), OperationError> {
        let user_id = storage
            .find_user(&self.user_id)
            .map(|user| user.id.clone())
            .ok_or(OperationError::UserNotFound)?;

        let wanted: HashSet<&str> = self
            .payload
            .iter()
            .filter_map(|entry| entry.song_id.as_deref())
            .collect();
        let song_ids: Vec<String> = storage
            .songs()
            .iter()
            .filter(|song| wanted.contains(song.id.as_str()))
            .map(|song| song.id.clone())
            .collect();
        if song_ids.is_empty() {
            return Err(OperationError::NoSongsFound);
        }

        let playlist = Playlist {
            id: storage.next_playlist_id(),
            user_id,
            song_ids,
        };
        debug!(playlist = %playlist.id, user = %playlist.user_id, songs = playlist.song_ids.len(), "Created playlist");
        storage.playlists_mut().push(playlist);
        Ok(())
    }
}
