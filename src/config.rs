//! Host page configuration for the web front end.

use serde::Deserialize;

use crate::error::SessionError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Id of the element the game mounts into; created under `<body>` if absent.
    pub root_id: String,
    pub dice_sound: String,
    pub music_sound: String,
    pub start_muted: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            root_id: "ph-battleboard".to_string(),
            dice_sound: "/sounds/dice-roll.mp3".to_string(),
            music_sound: "/sounds/bg-music.mp3".to_string(),
            start_muted: false,
        }
    }
}

impl WebConfig {
    /// Parse a JSON object; missing keys keep their defaults. Blank input is
    /// the default configuration.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
