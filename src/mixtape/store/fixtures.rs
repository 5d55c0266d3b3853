use super::Storage;
use crate::model::{Playlist, Record, Song, User};

pub struct StorageFixture {
    pub storage: Storage,
}

impl Default for StorageFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageFixture {
    pub fn new() -> Self {
        Self {
            storage: Storage::new(),
        }
    }

    pub fn with_user(mut self, id: &str, name: &str) -> Self {
        self.storage.push(Record::User(User {
            id: id.to_string(),
            name: name.to_string(),
        }));
        self
    }

    pub fn with_song(mut self, id: &str, artist: &str, title: &str) -> Self {
        self.storage.push(Record::Song(Song {
            id: id.to_string(),
            artist: artist.to_string(),
            title: title.to_string(),
        }));
        self
    }

    /// Adds `count` songs with ids "1".."count".
    pub fn with_songs(mut self, count: usize) -> Self {
        for i in 1..=count {
            self = self.with_song(&i.to_string(), &format!("Artist {}", i), &format!("Song {}", i));
        }
        self
    }

    pub fn with_playlist(mut self, id: &str, user_id: &str, song_ids: &[&str]) -> Self {
        self.storage.push(Record::Playlist(Playlist {
            id: id.to_string(),
            user_id: user_id.to_string(),
            song_ids: song_ids.iter().map(|s| s.to_string()).collect(),
        }));
        self
    }
}
