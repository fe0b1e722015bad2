use std::fmt;

use crate::paint::Paint;

/// Identifier handed back by a draw call. Starts at 1 and is never reused
/// within one canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub(crate) u64);

impl ShapeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geometry of a drawn primitive, stored exactly as the caller passed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Line {
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
    },
    Circle {
        center_x: f64,
        center_y: f64,
        radius: f64,
    },
    Rect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Rect { .. } => ShapeKind::Rect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Circle,
    Rect,
}

impl ShapeKind {
    /// SVG element name.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
        }
    }
}

/// One drawn primitive and the paint it renders with.
#[derive(Debug, Clone)]
pub struct Shape {
    pub geometry: Geometry,
    pub paint: Paint,
}

impl Shape {
    pub fn new(geometry: Geometry, paint: Paint) -> Self {
        Self { geometry, paint }
    }
}
