use scribe::{Config, render_svg, run_script};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScribeRenderOptions {
    width: Option<f64>,
    height: Option<f64>,
    xml_declaration: Option<bool>,
}

fn build_config(options: ScribeRenderOptions) -> Config {
    let mut config = Config::default();
    if let Some(width) = options.width {
        config.render.width = width;
    }
    if let Some(height) = options.height {
        config.render.height = height;
    }
    if let Some(xml_declaration) = options.xml_declaration {
        config.render.xml_declaration = xml_declaration;
    }
    config
}

fn render_script(script: &str, options: ScribeRenderOptions) -> Result<String, String> {
    let config = build_config(options);
    let drawing = run_script(script, &config).map_err(|error| error.to_string())?;
    Ok(render_svg(&drawing.canvas, &config.render))
}

#[wasm_bindgen]
pub fn render_scribe_svg(script: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<ScribeRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        ScribeRenderOptions::default()
    };

    render_script(script, options).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use crate::{ScribeRenderOptions, render_script};

    #[test]
    fn renders_script_with_option_defaults() {
        let options = ScribeRenderOptions {
            width: Some(40.0),
            height: Some(20.0),
            xml_declaration: None,
        };
        let svg = render_script(
            r#"{ commands: [{ op: "circle", cx: 10, cy: 10, r: 5 }] }"#,
            options,
        )
        .expect("script should render");

        assert!(svg.starts_with("<svg viewbox=\"0 0 40 20\""));
        assert!(svg.contains("<circle cx=\"10\" cy=\"10\" r=\"5\""));
    }

    #[test]
    fn reports_script_errors_as_text() {
        let err = render_script(
            r#"{ commands: [{ op: "line", x1: 0, y1: 0, x2: 1, y2: 1, paint: "ink" }] }"#,
            ScribeRenderOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, "unknown paint `ink`");
    }
}
