use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CHARSET_DEFAULT, GlyphPalette};
use crate::error::CoreError;

/// Bornes de la largeur de sortie, en caractères.
pub const WIDTH_RANGE: (u32, u32) = (1, 4096);
/// Bornes du facteur d'échelle vertical.
pub const SCALE_RANGE: (f64, f64) = (0.01, 10.0);

/// Row scheduling strategy. Both produce byte-identical output.
///
/// # Example
/// ```
/// use tg_core::config::Schedule;
/// assert_eq!(Schedule::default(), Schedule::Parallel);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Schedule {
    /// Rows computed one after the other on the calling thread.
    Sequential,
    /// Rows fanned out over the rayon pool, joined in row order.
    #[default]
    Parallel,
}

/// Configuration d'une conversion image → art ASCII.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use tg_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.width, 100);
/// assert!(config.color);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ConvertConfig {
    /// Largeur de sortie en caractères.
    pub width: u32,
    /// Facteur vertical : les cellules terminal sont ~2× plus hautes que larges.
    pub scale: f64,
    /// Activer la couleur truecolor.
    pub color: bool,
    /// Stratégie d'ordonnancement des lignes.
    pub schedule: Schedule,
    /// Palette, du plus dense au plus clair.
    pub charset: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: 100,
            scale: 0.15,
            color: true,
            schedule: Schedule::Parallel,
            charset: CHARSET_DEFAULT.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Fixed-aspect preset: 80 columns, half vertical density, no color.
    ///
    /// # Example
    /// ```
    /// use tg_core::config::ConvertConfig;
    /// let legacy = ConvertConfig::legacy();
    /// assert_eq!(legacy.width, 80);
    /// assert!((legacy.scale - 0.5).abs() < f64::EPSILON);
    /// assert!(!legacy.color);
    /// ```
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            width: 80,
            scale: 0.5,
            color: false,
            ..Self::default()
        }
    }

    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1);
        if self.scale.is_finite() {
            self.scale = self.scale.clamp(SCALE_RANGE.0, SCALE_RANGE.1);
        } else {
            log::warn!("scale non fini ({}), retour au défaut", self.scale);
            self.scale = Self::default().scale;
        }
    }

    /// Check the values the engine cannot recover from.
    ///
    /// # Errors
    /// Returns the first invalid field as a [`CoreError`].
    ///
    /// # Example
    /// ```
    /// use tg_core::config::ConvertConfig;
    /// let mut config = ConvertConfig::default();
    /// assert!(config.validate().is_ok());
    /// config.width = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 {
            return Err(CoreError::InvalidWidth(self.width));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CoreError::InvalidScale(self.scale));
        }
        if self.charset.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(())
    }

    /// Build the glyph palette described by `charset`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if `charset` is empty.
    pub fn palette(&self) -> Result<GlyphPalette, CoreError> {
        GlyphPalette::new(&self.charset)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    preset: Option<Preset>,
    convert: Option<ConvertSection>,
}

/// Named starting point before `[convert]` overrides are applied.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Preset {
    Default,
    Legacy,
}

/// Convert section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ConvertSection {
    width: Option<u32>,
    scale: Option<f64>,
    color: Option<bool>,
    schedule: Option<Schedule>,
    charset: Option<String>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
///
/// # Example
/// ```
/// use tg_core::config::parse_config;
/// let config = parse_config("[convert]\nwidth = 40\ncolor = false\n").unwrap();
/// assert_eq!(config.width, 40);
/// assert!(!config.color);
/// assert!((config.scale - 0.15).abs() < f64::EPSILON);
/// ```
pub fn parse_config(content: &str) -> Result<ConvertConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = match file.preset {
        Some(Preset::Legacy) => ConvertConfig::legacy(),
        Some(Preset::Default) | None => ConvertConfig::default(),
    };

    if let Some(c) = file.convert {
        if let Some(v) = c.width {
            config.width = v;
        }
        if let Some(v) = c.scale {
            config.scale = v;
        }
        if let Some(v) = c.color {
            config.color = v;
        }
        if let Some(v) = c.schedule {
            config.schedule = v;
        }
        if let Some(v) = c.charset {
            config.charset = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use tg_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("termglyph.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ConvertConfig::default());
    }

    #[test]
    fn legacy_preset_then_override() {
        let config = parse_config("preset = \"legacy\"\n[convert]\ncolor = true\n").unwrap();
        assert_eq!(config.width, 80);
        assert!((config.scale - 0.5).abs() < f64::EPSILON);
        assert!(config.color);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config("[convert]\nwidth = 0\nscale = 250.0\n").unwrap();
        assert_eq!(config.width, 1);
        assert!((config.scale - SCALE_RANGE.1).abs() < f64::EPSILON);
    }

    #[test]
    fn schedule_and_charset_parse() {
        let config =
            parse_config("[convert]\nschedule = \"Sequential\"\ncharset = \"#. \"\n").unwrap();
        assert_eq!(config.schedule, Schedule::Sequential);
        assert_eq!(config.palette().unwrap().len(), 3);
    }

    #[test]
    fn unknown_schedule_is_an_error() {
        assert!(parse_config("[convert]\nschedule = \"Turbo\"\n").is_err());
    }

    #[test]
    fn validate_rejects_bad_scale_and_charset() {
        let mut config = ConvertConfig {
            scale: -1.0,
            ..ConvertConfig::default()
        };
        assert_eq!(config.validate(), Err(CoreError::InvalidScale(-1.0)));
        config.scale = 0.5;
        config.charset.clear();
        assert_eq!(config.validate(), Err(CoreError::EmptyPalette));
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\nwidth = 64").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.width, 64);
    }

    #[test]
    fn load_config_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
