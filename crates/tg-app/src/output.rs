use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tg_core::frame::AsciiArt;

/// Écrit le rendu : dans `save` s'il est fourni, sinon ligne par ligne sur `out`.
///
/// When saving, the file holds the lines joined by `\n` with one trailing
/// newline, and a confirmation is written to `out`.
///
/// # Errors
/// Returns an error if the file or the stream cannot be written.
pub fn emit<W: Write>(art: &AsciiArt, save: Option<&Path>, out: &mut W) -> Result<()> {
    match save {
        Some(path) => {
            std::fs::write(path, art.to_text())
                .with_context(|| format!("Failed to write to file '{}'", path.display()))?;
            log::info!(
                "{}×{} écrit dans {}",
                art.width(),
                art.height(),
                path.display()
            );
            writeln!(out, "ASCII art saved to '{}'", path.display())
                .context("Impossible d'écrire sur stdout")?;
        }
        None => art
            .write_lines(out)
            .context("Impossible d'écrire sur stdout")?,
    }
    Ok(())
}
