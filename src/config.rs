use crate::color::Color;
use crate::number::NumericInput;
use crate::paint::{Paint, PaintValues};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas size used when a drawing script does not set one.
    pub width: f64,
    pub height: f64,
    pub xml_declaration: bool,
    pub png_scale: f32,
    /// Pixmap fill behind PNG output. SVG output is never given a background.
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            xml_declaration: false,
            png_scale: 1.0,
            background: Color::TRANSPARENT,
        }
    }
}

/// Initial values for a canvas's current paint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintConfig {
    pub foreground: Color,
    pub background: Color,
    pub stroke_width: f64,
}

impl PaintConfig {
    pub fn to_paint(&self) -> Paint {
        Paint::from_values(PaintValues {
            foreground: self.foreground,
            background: self.background,
            stroke_width: self.stroke_width,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderConfig,
    pub paint: PaintConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<NumericInput>,
    height: Option<NumericInput>,
    xml_declaration: Option<bool>,
    png_scale: Option<NumericInput>,
    background: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaintConfigFile {
    foreground: Option<String>,
    background: Option<String>,
    stroke_width: Option<NumericInput>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    render: Option<RenderConfigFile>,
    paint: Option<PaintConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config file {}", path.display()))
}

/// Applies a JSON config document on top of the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v.to_f64("render.width")?;
        }
        if let Some(v) = render.height {
            config.render.height = v.to_f64("render.height")?;
        }
        if let Some(v) = render.xml_declaration {
            config.render.xml_declaration = v;
        }
        if let Some(v) = render.png_scale {
            let scale = v.to_f64("render.pngScale")? as f32;
            anyhow::ensure!(scale > 0.0, "render.pngScale must be positive, got {scale}");
            config.render.png_scale = scale;
        }
        if let Some(v) = render.background {
            config.render.background = v.parse()?;
        }
    }

    if let Some(paint) = parsed.paint {
        if let Some(v) = paint.foreground {
            config.paint.foreground = v.parse()?;
        }
        if let Some(v) = paint.background {
            config.paint.background = v.parse()?;
        }
        if let Some(v) = paint.stroke_width {
            config.paint.stroke_width = v.to_f64("paint.strokeWidth")?;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScribeError;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.render.width, 1200.0);
        assert_eq!(config.render.height, 800.0);
        assert!(!config.render.xml_declaration);
        assert_eq!(config.paint, PaintConfig::default());
    }

    #[test]
    fn merges_sections_over_defaults() {
        let config = parse_config(
            r##"{
                "render": { "width": 320, "height": "240", "xmlDeclaration": true },
                "paint": { "foreground": "#FF000080", "strokeWidth": "1.25" }
            }"##,
        )
        .unwrap();
        assert_eq!(config.render.width, 320.0);
        assert_eq!(config.render.height, 240.0);
        assert!(config.render.xml_declaration);
        assert_eq!(config.render.png_scale, 1.0);
        assert_eq!(config.paint.foreground, Color::rgba(255, 0, 0, 128));
        assert_eq!(config.paint.background, Color::TRANSPARENT);
        assert_eq!(config.paint.stroke_width, 1.25);

        let paint = config.paint.to_paint();
        assert_eq!(paint.stroke_width(), 1.25);
    }

    #[test]
    fn reports_bad_values() {
        let err = parse_config(r#"{ "paint": { "background": "blue" } }"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScribeError>(),
            Some(ScribeError::InvalidColor(_))
        ));

        let err = parse_config(r#"{ "render": { "width": "wide" } }"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScribeError>(),
            Some(ScribeError::TypeConversion { .. })
        ));

        assert!(parse_config(r#"{ "render": { "pngScale": 0 } }"#).is_err());
        assert!(parse_config("not json").is_err());
    }
}
