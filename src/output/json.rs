use crate::view::ViewModel;
use anyhow::Result;

/// Pretty-printed JSON of the view-model.
pub fn render_json(view: &ViewModel) -> Result<String> {
    let mut json = serde_json::to_string_pretty(view)?;
    json.push('\n');
    Ok(json)
}
