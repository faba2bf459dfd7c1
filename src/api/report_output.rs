use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{Figure, RenderStyle, build_figure_frame};

/// Path of a figure artifact: `<output_dir>/<stem>.<extension>`.
#[must_use]
pub fn figure_artifact_path(output_dir: &Path, figure: &Figure, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{extension}", figure.stem))
}

/// Builds the frame of `figure` and hands it to `renderer`.
pub fn render_figure<R: Renderer>(
    renderer: &mut R,
    figure: &Figure,
    style: &RenderStyle,
) -> ChartResult<()> {
    let frame = build_figure_frame(figure, style)?;
    renderer.render(&frame)
}

/// Writes the figure (titles, labels and series samples) as pretty JSON.
///
/// Saturated samples (`+inf` queue length) are written as `null`.
pub fn write_figure_json(figure: &Figure, output_dir: &Path) -> ChartResult<PathBuf> {
    let path = figure_artifact_path(output_dir, figure, "json");
    let json = serde_json::to_string_pretty(figure).map_err(|err| {
        ChartError::InvalidData(format!("failed to serialize figure `{}`: {err}", figure.stem))
    })?;
    ensure_dir(output_dir)?;
    fs::write(&path, json).map_err(|source| ChartError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "figure json written");
    Ok(path)
}

/// Renders `figure` offscreen with Cairo and saves it as `<stem>.png`.
#[cfg(feature = "cairo-backend")]
pub fn write_figure_png(
    figure: &Figure,
    style: &RenderStyle,
    output_dir: &Path,
) -> ChartResult<PathBuf> {
    use crate::render::CairoRenderer;

    let frame = build_figure_frame(figure, style)?;
    let mut renderer = CairoRenderer::for_frame(&frame)?;
    renderer.set_clear_color(style.background_color)?;
    renderer.render(&frame)?;

    let path = figure_artifact_path(output_dir, figure, "png");
    renderer.write_png(&path)?;
    info!(path = %path.display(), "figure png written");
    Ok(path)
}

fn ensure_dir(dir: &Path) -> ChartResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| ChartError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
