//! Rendering of the view-model for non-interactive output.

pub mod json;
pub mod table;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub use json::render_json;
pub use table::{offer_label, render_footer, render_table, BEST_MARKER, NO_OFFER};

/// Write rendered output to `output_file`, or stdout when absent.
pub fn emit(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
