use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::document::render;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;
use std::path::Path;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Renders the canvas and serializes the resulting tree to text.
pub fn render_svg(canvas: &Canvas, config: &RenderConfig) -> String {
    let document = render(canvas);
    let mut svg = String::new();
    if config.xml_declaration {
        svg.push_str(XML_DECLARATION);
    }
    svg.push_str(&document.to_string());
    svg
}

/// Writes the canvas's shapes as SVG text into `writer`.
pub fn write_svg<W: Write>(mut writer: W, canvas: &Canvas, config: &RenderConfig) -> Result<()> {
    let svg = render_svg(canvas, config);
    writer.write_all(svg.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("wrote {} bytes to {}", svg.len(), path.display());
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

/// Rasterizes `svg` at `width`x`height` scaled by `render_cfg.png_scale`.
///
/// The document's viewport attribute is not one usvg reads, so the canvas size
/// is passed as the default viewport instead.
#[cfg(feature = "png")]
pub fn write_output_png(
    svg: &str,
    output: &Path,
    width: f64,
    height: f64,
    render_cfg: &RenderConfig,
) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(width as f32, height as f32)
        .ok_or_else(|| anyhow::anyhow!("cannot rasterize a {width}x{height} canvas"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = render_cfg.png_scale;
    let size = tree.size();
    let pixel_width = (size.width() * scale).ceil() as u32;
    let pixel_height = (size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(pixel_width, pixel_height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let bg = render_cfg.background;
    pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap
        .save_png(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    debug!("wrote {pixel_width}x{pixel_height} PNG to {}", output.display());
    Ok(())
}
