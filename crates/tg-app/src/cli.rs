use std::path::PathBuf;

use clap::Parser;
use tg_ascii::converter::Converter;
use tg_core::config::{ConvertConfig, Schedule};
use tg_core::error::CoreError;

/// termglyph — convertit une image en art ASCII pour le terminal.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Example:\n  termglyph --width 80 --no-color image.png\n  termglyph --save output.txt image.jpg"
)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF). Format détecté automatiquement.
    pub image: PathBuf,

    /// Largeur de sortie en caractères.
    #[arg(long)]
    pub width: Option<u32>,

    /// Facteur d'échelle vertical (affecte le calcul de la hauteur).
    #[arg(long)]
    pub scale: Option<f64>,

    /// Forcer la sortie couleur truecolor.
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Désactiver la couleur.
    #[arg(long)]
    pub no_color: bool,

    /// Écrire le résultat dans ce fichier au lieu de stdout.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Fichier de configuration TOML. Ignoré s'il n'existe pas.
    #[arg(short, long, default_value = "termglyph.toml")]
    pub config: PathBuf,

    /// Partir du preset historique (80 colonnes, scale 0.5, sans couleur).
    #[arg(long)]
    pub legacy: bool,

    /// Calculer les lignes séquentiellement plutôt qu'en parallèle.
    #[arg(long)]
    pub sequential: bool,

    /// Palette personnalisée, du plus dense au plus clair.
    #[arg(long)]
    pub charset: Option<String>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut ConvertConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if self.color {
            config.color = true;
        }
        if self.no_color {
            config.color = false;
        }
        if self.sequential {
            config.schedule = Schedule::Sequential;
        }
        if let Some(ref charset) = self.charset {
            config.charset.clone_from(charset);
        }
    }

    /// Apply the overrides to `config` and build the converter.
    ///
    /// Command-line values are taken as given, never clamped.
    ///
    /// # Errors
    /// Returns a [`CoreError`] if a requested value is unusable.
    pub fn converter(&self, mut config: ConvertConfig) -> Result<Converter, CoreError> {
        self.apply_overrides(&mut config);
        Converter::new(config)
    }
}
