use crate::config::load_config;
use crate::logging::init_logging;
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::{render_svg, write_output_svg};
use crate::script::run_script;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "scribe", version, about = "Render a JSON5 drawing script to SVG or PNG")]
pub struct Args {
    /// Drawing script (.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (render size, default paint)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width when the script does not set one
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Canvas height when the script does not set one
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,

    /// Log filter, e.g. "debug" or "scribe=trace". Overrides RUST_LOG.
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }

    let (source, origin) = read_input(args.input.as_deref())?;
    let drawing = run_script(&source, &config).with_context(|| format!("failed to run {origin}"))?;
    info!(
        "{origin}: {} shapes on a {}x{} canvas",
        drawing.canvas.shapes().len(),
        drawing.canvas.width(),
        drawing.canvas.height()
    );

    let svg = render_svg(&drawing.canvas, &config.render);
    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        #[cfg(feature = "png")]
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_output_png(
                &svg,
                &output,
                drawing.canvas.width(),
                drawing.canvas.height(),
                &config.render,
            )?;
        }
        #[cfg(not(feature = "png"))]
        OutputFormat::Png => {
            return Err(anyhow::anyhow!(
                "PNG output requires the `png` feature"
            ));
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    if let Some(path) = path {
        if path != Path::new("-") {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return Ok((content, path.display().to_string()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok((buf, "<stdin>".to_string()))
}

#[cfg_attr(not(feature = "png"), allow(dead_code))]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!(
        "Output path required for {} output",
        ext
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "scribe",
            "-i",
            "drawing.json5",
            "-e",
            "png",
            "-o",
            "out.png",
            "-w",
            "320",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("drawing.json5")));
        assert_eq!(args.output_format, OutputFormat::Png);
        assert_eq!(args.width, Some(320.0));
        assert_eq!(args.height, None);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn png_needs_output_path() {
        assert!(ensure_output(&None, "png").is_err());
        let path = PathBuf::from("x.png");
        assert_eq!(ensure_output(&Some(path.clone()), "png").unwrap(), path);
    }
}
