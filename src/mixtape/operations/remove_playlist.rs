use super::OperationError;
use crate::store::Storage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Deletes a playlist by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemovePlaylist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RemovePlaylist {
    pub fn validate(&self) -> Result<(), OperationError> {
        self.target().map(|_| ())
    }

    /// Removal matches on id only; every playlist carrying the id goes.
    pub fn apply(&self, storage: &mut Storage) -> Result<(), OperationError> {
        let id = self.target()?;
        if !storage.playlists().iter().any(|playlist| playlist.id == id) {
            return Err(OperationError::PlaylistNotFound);
        }

        storage.playlists_mut().retain(|playlist| playlist.id != id);
        debug!(playlist = %id, "Removed playlist");
        Ok(())
    }

    fn target(&self) -> Result<&str, OperationError> {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(OperationError::MissingPlaylistId),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scope;
    use crate::store::fixtures::StorageFixture;

    fn op(id: &str) -> RemovePlaylist {
        RemovePlaylist {
            id: Some(id.into()),
        }
    }

    #[test]
    fn removes_matching_playlist() {
        let mut storage = StorageFixture::new()
            .with_user("1", "Albin Jaye")
            .with_songs(2)
            .with_playlist("1", "1", &["1"])
            .with_playlist("2", "1", &["2"])
            .storage;

        op("1").apply(&mut storage).unwrap();

        let ids: Vec<&str> = storage.playlists().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
        assert_eq!(storage.len(Scope::Users), 1);
        assert_eq!(storage.len(Scope::Songs), 2);
    }

    #[test]
    fn removes_every_playlist_sharing_the_id() {
        let mut storage = StorageFixture::new()
            .with_playlist("3", "1", &[])
            .with_playlist("3", "2", &["1"])
            .with_playlist("4", "1", &[])
            .storage;

        op("3").apply(&mut storage).unwrap();

        assert_eq!(storage.len(Scope::Playlists), 1);
        assert_eq!(storage.playlists()[0].id, "4");
    }

    #[test]
    fn unknown_id_leaves_storage_unchanged() {
        let mut storage = StorageFixture::new().with_playlist("1", "1", &[]).storage;
        let before = storage.clone();

        let err = op("2").apply(&mut storage).unwrap_err();

        assert_eq!(err, OperationError::PlaylistNotFound);
        assert_eq!(storage, before);
    }

    #[test]
    fn missing_or_empty_id_is_invalid() {
        assert_eq!(
            RemovePlaylist { id: None }.validate(),
            Err(OperationError::MissingPlaylistId)
        );
        assert_eq!(op("").validate(), Err(OperationError::MissingPlaylistId));
        assert_eq!(op("1").validate(), Ok(()));
    }
}
