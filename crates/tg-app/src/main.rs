use anyhow::{Context, Result};
use clap::Parser;
use tg_core::config::ConvertConfig;

pub mod cli;
pub mod output;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let converter = cli
        .converter(resolve_config(&cli)?)
        .context("Configuration invalide")?;

    // 4. Décoder l'image
    let frame = tg_source::load_image(&cli.image)?;

    // 5. Convertir
    let art = converter
        .convert(&frame)
        .with_context(|| format!("Conversion impossible : {}", cli.image.display()))?;

    // 6. Écrire
    let stdout = std::io::stdout();
    output::emit(&art, cli.save.as_deref(), &mut stdout.lock())
}

/// Resolve config: `--legacy` takes priority over `--config`.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    if cli.legacy {
        Ok(ConvertConfig::legacy())
    } else if cli.config.exists() {
        tg_core::config::load_config(&cli.config)
    } else {
        log::debug!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConvertConfig::default())
    }
}
