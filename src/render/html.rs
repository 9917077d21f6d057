use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use rust_embed::RustEmbed;

use crate::configuration::config::Settings;
use crate::configuration::types::RenderOptions;
use crate::dot::statement::GraphDescription;
use crate::error_handling::types::RenderError;

const TEMPLATE: &str = "index.html";

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/"]
struct Assets;

/// Page-level inputs of the HTML shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub title: &'a str,
    pub viz_script: &'a str,
    pub render: &'a RenderOptions,
}

impl<'a> From<&'a Settings> for Page<'a> {
    fn from(settings: &'a Settings) -> Self {
        Self {
            title: &settings.title,
            viz_script: &settings.viz_script,
            render: &settings.render,
        }
    }
}

fn template() -> Result<String, RenderError> {
    let file =
        Assets::get(TEMPLATE).ok_or_else(|| RenderError::TemplateMissing(TEMPLATE.to_string()))?;
    std::str::from_utf8(&file.data)
        .map(str::to_string)
        .map_err(|e| RenderError::TemplateEncoding(e.to_string()))
}

/// Embeds the graph description into a self-contained page that calls `Viz` on load.
pub fn render_page(desc: &GraphDescription, page: &Page<'_>) -> Result<String, RenderError> {
    info!("Rendering HTML");
    let options = serde_json::to_string(page.render)?;
    let title = escape_html(page.title);
    let viz_script = escape_html(page.viz_script);
    let graph = escape_template_literal(&desc.to_dot());

    let html = fill_placeholders(&template()?, |name| match name {
        "TITLE" => Some(title.as_str()),
        "VIZ_SCRIPT" => Some(viz_script.as_str()),
        "OPTIONS" => Some(options.as_str()),
        "GRAPH" => Some(graph.as_str()),
        _ => None,
    });
    Ok(html)
}

/// Replaces every `{{NAME}}` in one pass over `template`. Substituted text is never
/// scanned again; unknown names are left as they are.
fn fill_placeholders<'v>(template: &str, value: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}").and_then(|end| value(&after[..end]).map(|v| (end, v))) {
            Some((end, v)) => {
                out.push_str(v);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Writes the page to `output`, or to standard output when no file is given.
pub fn write_page(html: &str, output: Option<&Path>) -> Result<(), RenderError> {
    match output {
        Some(path) => {
            fs::write(path, html)?;
            info!("HTML written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(html.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Keeps the DOT text inert inside a JavaScript template literal and its `<script>`.
fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace("</", "<\\/")
}
