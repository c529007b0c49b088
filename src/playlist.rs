//! Song playlist kept in a [`PositionalList`], reordered with the
//! positional operations.

use crate::error::{AppError, ListError};
use crate::linked_list::PositionalList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSong {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub length_secs: u32,
}

impl Default for PlaylistSong {
    fn default() -> Self {
        PlaylistSong::new("none", "none", "none", 0)
    }
}

impl PlaylistSong {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        length_secs: u32,
    ) -> Self {
        PlaylistSong {
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
            length_secs,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Unique ID: {}\nSong Name: {}\nArtist Name: {}\nSong Length (in seconds): {}\n",
            self.id, self.name, self.artist, self.length_secs
        )
    }
}

#[derive(Debug)]
pub struct Playlist {
    pub title: String,
    songs: PositionalList<PlaylistSong>,
}

impl Playlist {
    pub fn new(title: impl Into<String>) -> Self {
        Playlist {
            title: title.into(),
            songs: PositionalList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> impl Iterator<Item = &PlaylistSong> {
        self.songs.iter()
    }

    pub fn add_song(&mut self, song: PlaylistSong) {
        self.songs.insert_last(song);
    }

    pub fn remove_song(&mut self, id: &str) -> Result<PlaylistSong, AppError> {
        let offset = self
            .songs
            .iter()
            .position(|song| song.id == id)
            .ok_or_else(|| AppError::SongNotFound { id: id.to_string() })?
            + 1;
        Ok(self.songs.try_remove_at_offset(offset)?)
    }

    /// Moves the song at `from` towards `to` (both 1-indexed) and returns
    /// where it landed. A target before the head or past the tail is
    /// clamped to the ends.
    pub fn change_position(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<(usize, &PlaylistSong), ListError> {
        let song = self.songs.try_remove_at_offset(from)?;
        let to = to.clamp(1, self.songs.len() + 1);
        self.songs.try_insert_at_offset(to, song)?;
        Ok((to, self.songs.element_at_offset(to)?))
    }

    /// Songs by `artist`, paired with their 1-indexed position.
    pub fn songs_by_artist<'a>(
        &'a self,
        artist: &'a str,
    ) -> impl Iterator<Item = (usize, &'a PlaylistSong)> {
        self.songs
            .iter()
            .enumerate()
            .filter(move |(_, song)| song.artist == artist)
            .map(|(index, song)| (index + 1, song))
    }

    pub fn total_time(&self) -> u64 {
        self.songs.iter().map(|song| u64::from(song.length_secs)).sum()
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} - OUTPUT FULL PLAYLIST\n", self.title);
        if self.songs.is_empty() {
            out.push_str("Playlist is empty\n");
            return out;
        }
        for (index, song) in self.songs.iter().enumerate() {
            out.push_str(&format!("{}.\n{}\n", index + 1, song.render()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Playlist {
        let mut playlist = Playlist::new("JAMZ");
        playlist.add_song(PlaylistSong::new("SD123", "Peg", "Steely Dan", 237));
        playlist.add_song(PlaylistSong::new("JJ234", "All For You", "Janet Jackson", 391));
        playlist.add_song(PlaylistSong::new("J345", "Canned Heat", "Jamiroquai", 330));
        playlist.add_song(PlaylistSong::new("JJ456", "Black Eagle", "Janet Jackson", 197));
        playlist
    }

    fn ids(playlist: &Playlist) -> Vec<&str> {
        playlist.songs().map(|song| song.id.as_str()).collect()
    }

    #[test]
    fn test_render_song() {
        let song = PlaylistSong::new("SD123", "Peg", "Steely Dan", 237);
        assert_eq!(
            song.render(),
            "Unique ID: SD123\nSong Name: Peg\nArtist Name: Steely Dan\nSong Length (in seconds): 237\n"
        );
    }

    #[test]
    fn test_render_empty_playlist() {
        let playlist = Playlist::new("JAMZ");
        assert_eq!(playlist.render(), "JAMZ - OUTPUT FULL PLAYLIST\nPlaylist is empty\n");
    }

    #[test]
    fn test_render_numbers_songs() {
        let rendered = playlist().render();
        assert!(rendered.starts_with("JAMZ - OUTPUT FULL PLAYLIST\n1.\nUnique ID: SD123\n"));
        assert!(rendered.contains("\n4.\nUnique ID: JJ456\n"));
    }

    #[test]
    fn test_remove_song() {
        let mut playlist = playlist();
        let removed = playlist.remove_song("J345").unwrap();
        assert_eq!(removed.name, "Canned Heat");
        assert_eq!(ids(&playlist), vec!["SD123", "JJ234", "JJ456"]);

        let missing = playlist.remove_song("XX000");
        assert!(matches!(missing, Err(AppError::SongNotFound { .. })));
    }

    #[test]
    fn test_change_position() {
        let mut playlist = playlist();
        let (position, moved) = playlist.change_position(4, 2).unwrap();
        assert_eq!(position, 2);
        assert_eq!(moved.id, "JJ456");
        assert_eq!(ids(&playlist), vec!["SD123", "JJ456", "JJ234", "J345"]);
    }

    #[test]
    fn test_change_position_clamps_to_ends() {
        let mut playlist = playlist();
        let (position, _) = playlist.change_position(1, 99).unwrap();
        assert_eq!(position, 4);
        assert_eq!(ids(&playlist), vec!["JJ234", "J345", "JJ456", "SD123"]);

        playlist.change_position(3, 0).unwrap();
        assert_eq!(ids(&playlist), vec!["JJ456", "JJ234", "J345", "SD123"]);
    }

    #[test]
    fn test_change_position_missing_song() {
        let mut playlist = playlist();
        assert_eq!(
            playlist.change_position(9, 1).unwrap_err(),
            ListError::PositionUnavailable { offset: 9, len: 4 }
        );
        assert_eq!(playlist.len(), 4);
    }

    #[test]
    fn test_songs_by_artist_and_total_time() {
        let playlist = playlist();
        let janet: Vec<usize> = playlist
            .songs_by_artist("Janet Jackson")
            .map(|(position, _)| position)
            .collect();
        assert_eq!(janet, vec![2, 4]);
        assert_eq!(playlist.total_time(), 237 + 391 + 330 + 197);
    }

    #[test]
    fn test_total_time_past_u32_range() {
        let mut playlist = Playlist::new("Long");
        playlist.add_song(PlaylistSong::new("A1", "Drone", "Sunn O)))", u32::MAX));
        playlist.add_song(PlaylistSong::new("A2", "Coda", "Sunn O)))", 1));
        assert_eq!(playlist.total_time(), u64::from(u32::MAX) + 1);
    }
}
