use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Cyberpunk,
    Hacker,
    Dark,
    Neon,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Cyberpunk, Theme::Hacker, Theme::Dark, Theme::Neon];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Cyberpunk => "cyberpunk",
            Theme::Hacker => "hacker",
            Theme::Dark => "dark",
            Theme::Neon => "neon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundTheme {
    Rain,
    Lofi,
    Cyberwave,
    #[default]
    Silence,
}

impl SoundTheme {
    pub const ALL: [SoundTheme; 4] = [
        SoundTheme::Rain,
        SoundTheme::Lofi,
        SoundTheme::Cyberwave,
        SoundTheme::Silence,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SoundTheme::Rain => "rain",
            SoundTheme::Lofi => "lofi",
            SoundTheme::Cyberwave => "cyberwave",
            SoundTheme::Silence => "silence",
        }
    }
}
