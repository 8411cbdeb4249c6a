//! Demo state

use std::time::Duration;

/// Which pane receives keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Menu,
    Bio,
    Tracks,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Menu => Focus::Bio,
            Focus::Bio => Focus::Tracks,
            Focus::Tracks => Focus::Menu,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Menu => Focus::Tracks,
            Focus::Bio => Focus::Menu,
            Focus::Tracks => Focus::Bio,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

impl Track {
    fn new(title: &str, artist: &str, album: Option<&str>, secs: Option<u64>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.map(Into::into),
            duration: secs.map(Duration::from_secs),
        }
    }
}

/// Labels of the playlist menu, in item order
pub const MENU_ITEMS: [&str; 4] = ["Play selected", "Next track", "Clear bio", "Quit"];

#[derive(Clone, Debug)]
pub struct DemoState {
    pub focus: Focus,
    pub bio: String,
    pub max_chars: Option<usize>,
    pub tracks: Vec<Track>,
    pub selected_track: usize,
    pub playing: Option<usize>,
}

impl DemoState {
    pub fn new(max_chars: Option<usize>) -> Self {
        Self {
            focus: Focus::default(),
            bio: String::new(),
            max_chars,
            tracks: vec![
                Track::new("So What", "Miles Davis", Some("Kind of Blue"), Some(562)),
                Track::new("Naima", "John Coltrane", Some("Giant Steps"), Some(261)),
                Track::new("Untitled Demo", "Unknown Artist", None, None),
            ],
            selected_track: 0,
            playing: None,
        }
    }

    pub fn status(&self) -> String {
        match self.playing.and_then(|i| self.tracks.get(i)) {
            Some(track) => format!("Playing: {} - {}", track.title, track.artist),
            None => "Nothing playing".to_string(),
        }
    }
}
