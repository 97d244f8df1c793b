//! Display glyph configuration.
//!
//! A small JSON file maps each on-screen role to the string drawn for it:
//!
//! ```json
//! {
//!   "player": "😋", "ghost": "👻", "wall": "🟦", "dot": "🔸",
//!   "pill": "💊", "death": "💀", "space": "  ", "use_emoji": true
//! }
//! ```
//!
//! Missing keys fall back to the plain ASCII defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub player: String,
    pub ghost: String,
    pub wall: String,
    pub dot: String,
    /// Accepted for compatibility with existing config files; no map marker places pills.
    pub pill: String,
    pub death: String,
    pub space: String,
    /// Each grid cell spans two terminal columns instead of one.
    pub use_emoji: bool,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            player: "P".into(),
            ghost: "G".into(),
            wall: "#".into(),
            dot: ".".into(),
            pill: "X".into(),
            death: "X".into(),
            space: " ".into(),
            use_emoji: false,
        }
    }
}

impl Glyphs {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Terminal columns per grid cell.
    pub fn cell_width(&self) -> u16 {
        if self.use_emoji {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let g = Glyphs::from_json(
            r#"{"player":"😋","ghost":"👻","wall":"🟦","dot":"🔸","pill":"💊",
                "death":"💀","space":"  ","use_emoji":true}"#,
        )
        .unwrap();
        assert_eq!(g.ghost, "👻");
        assert!(g.use_emoji);
        assert_eq!(g.cell_width(), 2);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let g = Glyphs::from_json(r#"{"wall":"█"}"#).unwrap();
        assert_eq!(g.wall, "█");
        assert_eq!(g.player, "P");
        assert_eq!(g.cell_width(), 1);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(Glyphs::from_json("{ player: P }").is_err());
        assert!(Glyphs::from_json(r#"{"use_emoji":"yes"}"#).is_err());
    }

    #[test]
    fn load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let err = Glyphs::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("config.json"));

        let err = Glyphs::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
