//! Translation from canvas shapes to an SVG element tree.

use std::fmt;

use log::{debug, trace, warn};

use crate::canvas::Canvas;
use crate::shape::{Geometry, Shape};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A generic XML element: a tag, ordered attributes and child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Replaces an existing attribute of the same name in place, otherwise
    /// appends.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        let name = name.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, escape_xml(value))?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// Builds the document for the canvas as it is right now. The canvas is not
/// modified, so rendering twice gives equal trees.
pub fn render(canvas: &Canvas) -> Element {
    let mut root = Element::new("svg")
        .with_attr("viewbox", format!("0 0 {} {}", canvas.width(), canvas.height()))
        .with_attr("xmlns", SVG_NAMESPACE);

    for (id, shape) in canvas.shapes().iter() {
        let element = shape_element(shape);
        trace!("shape #{id} -> <{}>", element.name);
        root.push(element);
    }

    debug!("rendered {} shapes", root.children.len());
    root
}

/// Numbers are written with `f64`'s `Display`, so integral values lose their
/// fractional part: a zero stroke width is emitted as `stroke-width="0"`,
/// not `0.0`.
fn shape_element(shape: &Shape) -> Element {
    let element = Element::new(shape.geometry.kind().tag());
    let element = match shape.geometry {
        Geometry::Line {
            start_x,
            start_y,
            end_x,
            end_y,
        } => element
            .with_attr("x1", start_x)
            .with_attr("y1", start_y)
            .with_attr("x2", end_x)
            .with_attr("y2", end_y),
        Geometry::Circle {
            center_x,
            center_y,
            radius,
        } => element
            .with_attr("cx", center_x)
            .with_attr("cy", center_y)
            .with_attr("r", radius),
        Geometry::Rect {
            left,
            top,
            right,
            bottom,
        } => {
            let width = right - left;
            let height = bottom - top;
            if width < 0.0 || height < 0.0 {
                warn!("rect has negative extent ({width}x{height}); emitting unchanged");
            }
            element
                .with_attr("x", left)
                .with_attr("y", top)
                .with_attr("width", width)
                .with_attr("height", height)
        }
    };

    let paint = shape.paint.values();
    element
        .with_attr("stroke", paint.foreground.encode())
        .with_attr("fill", paint.background.encode())
        .with_attr("stroke-width", paint.stroke_width)
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
