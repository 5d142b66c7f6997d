use anyhow::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use super::prepare_view;
use crate::cli::{OutputFormat, ViewArgs};
use crate::output::{emit, render_json, render_table};
use crate::view::ViewModel;

pub fn handle_list_command(
    config_path: Option<&Path>,
    view: &ViewArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let coordinator = prepare_view(config_path, view)?;
    let model = coordinator.view_model();

    log::debug!(
        "Rendering page {} of {} ({} rows)",
        model.current_page,
        model.total_pages,
        model.rows.len()
    );

    let width = if output.is_none() { terminal_width() } else { None };
    let content = render(&model, format, width)?;
    emit(&content, output.as_deref())
}

pub fn render(model: &ViewModel, format: OutputFormat, width: Option<u16>) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(model, width)),
        OutputFormat::Json => render_json(model),
    }
}

fn terminal_width() -> Option<u16> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size().ok().map(|(width, _)| width)
}
