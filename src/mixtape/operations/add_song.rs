use super::OperationError;
use crate::store::Storage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Appends an existing song to an existing playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddSong {
    pub playlist_id: String,
    pub song_id: String,
}

impl AddSong {
    pub fn validate(&self) -> Result<(), OperationError> {
        Ok(())
    }

    /// Duplicates are allowed: adding a song twice lists it twice.
    pub fn apply(&self, storage: &mut Storage) -> Result<(), OperationError> {
        let song_id = storage
            .find_song(&self.song_id)
            .map(|song| song.id.clone())
            .ok_or(OperationError::SongNotFound)?;
        let playlist = storage
            .find_playlist_mut(&self.playlist_id)
            .ok_or(OperationError::PlaylistNotFound)?;

        playlist.song_ids.push(song_id);
        debug!(playlist = %playlist.id, song = %self.song_id, "Added song to playlist");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scope;
    use crate::store::fixtures::StorageFixture;

    fn op(playlist_id: &str, song_id: &str) -> AddSong {
        AddSong {
            playlist_id: playlist_id.into(),
            song_id: song_id.into(),
        }
    }

    #[test]
    fn appends_song_to_playlist() {
        let mut storage = StorageFixture::new()
            .with_user("1", "Albin Jaye")
            .with_songs(3)
            .with_playlist("1", "1", &["1"])
            .storage;

        op("1", "3").apply(&mut storage).unwrap();

        assert_eq!(storage.playlists()[0].song_ids, vec!["1", "3"]);
        assert_eq!(storage.len(Scope::Songs), 3);
        assert_eq!(storage.len(Scope::Users), 1);
        assert_eq!(storage.len(Scope::Playlists), 1);
    }

    #[test]
    fn allows_duplicates() {
        let mut storage = StorageFixture::new()
            .with_songs(1)
            .with_playlist("1", "1", &["1"])
            .storage;

        op("1", "1").apply(&mut storage).unwrap();

        assert_eq!(storage.playlists()[0].song_ids, vec!["1", "1"]);
    }

    #[test]
    fn missing_song_leaves_storage_unchanged() {
        let mut storage = StorageFixture::new()
            .with_songs(1)
            .with_playlist("1", "1", &[])
            .storage;
        let before = storage.clone();

        let err = op("1", "42").apply(&mut storage).unwrap_err();

        assert_eq!(err, OperationError::SongNotFound);
        assert_eq!(storage, before);
    }

    #[test]
    fn missing_playlist_leaves_storage_unchanged() {
        let mut storage = StorageFixture::new()
            .with_songs(1)
            .with_playlist("1", "1", &[])
            .storage;
        let before = storage.clone();

        let err = op("7", "1").apply(&mut storage).unwrap_err();

        assert_eq!(err, OperationError::PlaylistNotFound);
        assert_eq!(storage, before);
    }

    #[test]
    fn song_is_looked_up_before_playlist() {
        let mut storage = StorageFixture::new().storage;
        assert_eq!(
            op("7", "42").apply(&mut storage).unwrap_err(),
            OperationError::SongNotFound
        );
    }
}
