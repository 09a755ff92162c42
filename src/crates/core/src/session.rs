//! Shared session state: theme and sound selection, panel visibility
//! flags, and the local user identity.

use neoncode_core_types::{SoundTheme, Theme};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
}

impl SessionUser {
    fn local() -> Self {
        Self {
            id: format!("user-{}", Uuid::new_v4().simple()),
            username: "Coder".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    theme: Theme,
    sound_theme: SoundTheme,
    sound_playing: bool,
    learning_mode: bool,
    debug_mode: bool,
    terminal_open: bool,
    multiplayer_mode: bool,
    presentation_mode: bool,
    user: SessionUser,
}

impl Session {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            sound_theme: SoundTheme::default(),
            sound_playing: false,
            learning_mode: false,
            debug_mode: false,
            terminal_open: false,
            multiplayer_mode: false,
            presentation_mode: false,
            user: SessionUser::local(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!(?theme, "theme changed");
        self.theme = theme;
    }

    pub fn sound_theme(&self) -> SoundTheme {
        self.sound_theme
    }

    pub fn set_sound_theme(&mut self, sound_theme: SoundTheme) {
        self.sound_theme = sound_theme;
        // Picking silence stops playback outright.
        if sound_theme == SoundTheme::Silence {
            self.sound_playing = false;
        }
    }

    pub fn sound_playing(&self) -> bool {
        self.sound_playing
    }

    pub fn toggle_sound(&mut self) {
        if self.sound_theme == SoundTheme::Silence {
            return;
        }
        self.sound_playing = !self.sound_playing;
    }

    pub fn learning_mode(&self) -> bool {
        self.learning_mode
    }

    pub fn set_learning_mode(&mut self, on: bool) {
        self.learning_mode = on;
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn set_debug_mode(&mut self, on: bool) {
        self.debug_mode = on;
    }

    pub fn terminal_open(&self) -> bool {
        self.terminal_open
    }

    pub fn set_terminal_open(&mut self, open: bool) {
        self.terminal_open = open;
    }

    pub fn multiplayer_mode(&self) -> bool {
        self.multiplayer_mode
    }

    pub fn toggle_multiplayer(&mut self) {
        self.multiplayer_mode = !self.multiplayer_mode;
    }

    pub fn presentation_mode(&self) -> bool {
        self.presentation_mode
    }

    pub fn toggle_presentation(&mut self) {
        self.presentation_mode = !self.presentation_mode;
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn set_username(&mut self, username: &str) {
        let trimmed = username.trim();
        if !trimmed.is_empty() {
            self.user.username = trimmed.to_string();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_session() {
        let session = Session::new();
        assert_eq!(session.theme(), Theme::Cyberpunk);
        assert_eq!(session.sound_theme(), SoundTheme::Silence);
        assert!(!session.sound_playing());
        assert!(!session.learning_mode());
        assert!(!session.terminal_open());
        assert!(session.user().id.starts_with("user-"));
        assert_eq!(session.user().username, "Coder");
    }

    #[test]
    fn silence_blocks_and_stops_playback() {
        let mut session = Session::new();
        session.toggle_sound();
        assert!(!session.sound_playing());

        session.set_sound_theme(SoundTheme::Lofi);
        session.toggle_sound();
        assert!(session.sound_playing());

        session.set_sound_theme(SoundTheme::Silence);
        assert!(!session.sound_playing());
    }

    #[test]
    fn username_updates_ignore_blank_input() {
        let mut session = Session::new();
        session.set_username("   ");
        assert_eq!(session.user().username, "Coder");
        session.set_username("  Nova ");
        assert_eq!(session.user().username, "Nova");
    }
}
