//! JSON5 drawing scripts replayed against a [`Canvas`].
//!
//! ```json5
//! {
//!   width: 100, height: 50,
//!   paints: { red: { foreground: [255, 0, 0, 255], strokeWidth: 2 } },
//!   commands: [
//!     { op: "line", x1: 0, y1: 0, x2: 10, y2: 10 },
//!     { op: "circle", cx: 5, cy: 5, r: 2, paint: "red" },
//!     { op: "usePaint", name: "red" },
//!     { op: "rect", left: 0, top: 0, right: 20, bottom: 10 },
//!     { op: "setPaint", name: "red", background: [0, 0, 255, 255] },
//!   ],
//! }
//! ```
//!
//! Named paints are shared handles: `setPaint` changes every shape already
//! drawn with that paint. `setPaint` without a name edits the canvas's
//! current paint.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::canvas::Canvas;
use crate::color::validate_json;
use crate::config::Config;
use crate::error::{Result, ScribeError};
use crate::number::NumericInput;
use crate::paint::Paint;
use crate::shape::ShapeId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ScriptFile {
    width: Option<NumericInput>,
    height: Option<NumericInput>,
    #[serde(default)]
    paints: BTreeMap<String, PaintEntry>,
    #[serde(default)]
    commands: Vec<Command>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PaintEntry {
    foreground: Option<Vec<Value>>,
    background: Option<Vec<Value>>,
    stroke_width: Option<NumericInput>,
}

#[derive(Debug, Deserialize)]
#[serde(
    tag = "op",
    rename_all = "camelCase",
    rename_all_fields = "camelCase",
    deny_unknown_fields
)]
enum Command {
    Line {
        x1: NumericInput,
        y1: NumericInput,
        x2: NumericInput,
        y2: NumericInput,
        paint: Option<String>,
    },
    Circle {
        cx: NumericInput,
        cy: NumericInput,
        r: NumericInput,
        paint: Option<String>,
    },
    Rect {
        left: NumericInput,
        top: NumericInput,
        right: NumericInput,
        bottom: NumericInput,
        paint: Option<String>,
    },
    UsePaint {
        name: String,
    },
    SetPaint {
        name: Option<String>,
        foreground: Option<Vec<Value>>,
        background: Option<Vec<Value>>,
        stroke_width: Option<NumericInput>,
    },
}

/// Result of replaying a script.
#[derive(Debug)]
pub struct Drawing {
    pub canvas: Canvas,
    pub paints: BTreeMap<String, Paint>,
    pub shape_ids: Vec<ShapeId>,
}

/// Parses `source` and replays it. Canvas size and the starting current
/// paint come from `config` unless the script sets them.
pub fn run_script(source: &str, config: &Config) -> Result<Drawing> {
    let script: ScriptFile =
        json5::from_str(source).map_err(|err| ScribeError::Script(err.to_string()))?;

    let width = match &script.width {
        Some(v) => v.to_f64("width")?,
        None => config.render.width,
    };
    let height = match &script.height {
        Some(v) => v.to_f64("height")?,
        None => config.render.height,
    };

    let mut paints = BTreeMap::new();
    for (name, entry) in &script.paints {
        let paint = Paint::new();
        apply_paint_entry(
            &paint,
            entry.foreground.as_deref(),
            entry.background.as_deref(),
            entry.stroke_width.as_ref(),
        )?;
        paints.insert(name.clone(), paint);
    }

    let mut canvas = Canvas::with_paint(width, height, config.paint.to_paint());
    let mut shape_ids = Vec::new();
    for command in &script.commands {
        if let Some(id) = execute(&mut canvas, &paints, command)? {
            shape_ids.push(id);
        }
    }
    debug!(
        "script replayed: {} commands, {} shapes, {} named paints",
        script.commands.len(),
        shape_ids.len(),
        paints.len()
    );

    Ok(Drawing {
        canvas,
        paints,
        shape_ids,
    })
}

fn execute(
    canvas: &mut Canvas,
    paints: &BTreeMap<String, Paint>,
    command: &Command,
) -> Result<Option<ShapeId>> {
    let id = match command {
        Command::Line {
            x1,
            y1,
            x2,
            y2,
            paint,
        } => {
            let paint = lookup(paints, paint.as_deref())?;
            canvas.draw_line(
                x1.to_f64("line.x1")?,
                y1.to_f64("line.y1")?,
                x2.to_f64("line.x2")?,
                y2.to_f64("line.y2")?,
                paint,
            )
        }
        Command::Circle { cx, cy, r, paint } => {
            let paint = lookup(paints, paint.as_deref())?;
            canvas.draw_circle(
                cx.to_f64("circle.cx")?,
                cy.to_f64("circle.cy")?,
                r.to_f64("circle.r")?,
                paint,
            )
        }
        Command::Rect {
            left,
            top,
            right,
            bottom,
            paint,
        } => {
            let paint = lookup(paints, paint.as_deref())?;
            canvas.draw_rectangle(
                left.to_f64("rect.left")?,
                top.to_f64("rect.top")?,
                right.to_f64("rect.right")?,
                bottom.to_f64("rect.bottom")?,
                paint,
            )
        }
        Command::UsePaint { name } => {
            if let Some(paint) = lookup(paints, Some(name.as_str()))? {
                canvas.set_paint(paint.clone());
            }
            return Ok(None);
        }
        Command::SetPaint {
            name,
            foreground,
            background,
            stroke_width,
        } => {
            let target = match lookup(paints, name.as_deref())? {
                Some(paint) => paint,
                None => canvas.paint(),
            };
            apply_paint_entry(
                target,
                foreground.as_deref(),
                background.as_deref(),
                stroke_width.as_ref(),
            )?;
            return Ok(None);
        }
    };
    Ok(Some(id))
}

fn lookup<'a>(
    paints: &'a BTreeMap<String, Paint>,
    name: Option<&str>,
) -> Result<Option<&'a Paint>> {
    match name {
        Some(name) => paints
            .get(name)
            .map(Some)
            .ok_or_else(|| ScribeError::UnknownPaint(name.to_string())),
        None => Ok(None),
    }
}

fn apply_paint_entry(
    paint: &Paint,
    foreground: Option<&[Value]>,
    background: Option<&[Value]>,
    stroke_width: Option<&NumericInput>,
) -> Result<()> {
    if let Some(components) = foreground {
        paint.set_foreground(validate_json(components)?);
    }
    if let Some(components) = background {
        paint.set_background(validate_json(components)?);
    }
    if let Some(width) = stroke_width {
        paint.set_stroke_width(width.clone())?;
        if paint.stroke_width() < 0.0 {
            warn!("negative stroke width {} accepted", paint.stroke_width());
        }
    }
    Ok(())
}
