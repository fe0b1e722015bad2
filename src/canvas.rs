use log::{debug, trace};

use crate::paint::Paint;
use crate::shape::{Geometry, Shape, ShapeId};
use crate::store::ShapeStore;

/// Accumulates draw calls for later rendering.
///
/// `width` and `height` only feed the output viewport; shapes may lie outside
/// them.
#[derive(Debug)]
pub struct Canvas {
    width: f64,
    height: f64,
    paint: Paint,
    shapes: ShapeStore,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_paint(width, height, Paint::new())
    }

    pub fn with_paint(width: f64, height: f64, paint: Paint) -> Self {
        debug!("canvas created: {width}x{height}");
        Self {
            width,
            height,
            paint,
            shapes: ShapeStore::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The current paint. Edits made through this handle apply to every shape
    /// already drawn with it, as well as future paint-less draw calls.
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.paint = paint;
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.shapes
    }

    pub fn draw_line(
        &mut self,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        paint: Option<&Paint>,
    ) -> ShapeId {
        self.draw(
            Geometry::Line {
                start_x,
                start_y,
                end_x,
                end_y,
            },
            paint,
        )
    }

    pub fn draw_circle(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        paint: Option<&Paint>,
    ) -> ShapeId {
        self.draw(
            Geometry::Circle {
                center_x,
                center_y,
                radius,
            },
            paint,
        )
    }

    pub fn draw_rectangle(
        &mut self,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        paint: Option<&Paint>,
    ) -> ShapeId {
        self.draw(
            Geometry::Rect {
                left,
                top,
                right,
                bottom,
            },
            paint,
        )
    }

    /// Appends `geometry` with `paint`, or the current paint when `None`.
    pub fn draw(&mut self, geometry: Geometry, paint: Option<&Paint>) -> ShapeId {
        let paint = paint.unwrap_or(&self.paint).clone();
        let id = self.shapes.add(Shape::new(geometry, paint));
        trace!("drew {} #{id}: {geometry:?}", geometry.kind().tag());
        id
    }
}
