/// Themed song list for the music panel. Only tracks selection; nothing is played.
use crate::config::PerTheme;
use crate::types::{Song, Theme};

pub struct Playlist {
    songs: PerTheme<Song>,
    theme: Theme,
    index: usize,
    pub playing: bool,
}

impl Playlist {
    pub fn new(songs: PerTheme<Song>, theme: Theme) -> Self {
        Self {
            songs,
            theme,
            index: 0,
            playing: false,
        }
    }

    pub fn songs(&self) -> &[Song] {
        self.songs.for_theme(self.theme)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Song> {
        self.songs().get(self.index)
    }

    pub fn next(&mut self) {
        let len = self.songs().len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn previous(&mut self) {
        let len = self.songs().len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Switch to the other theme's list and start from its first song.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.index = 0;
    }
}
