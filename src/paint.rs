//! Stroke/fill/width styling shared between a canvas and its shapes.
//!
//! A [`Paint`] is a handle. Cloning it, passing it to a draw call, or
//! installing it on a canvas all share the same underlying values, so editing
//! the paint later changes how every shape that holds it renders. Use
//! [`Paint::snapshot`] to detach a copy.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::color::{Color, ColorComponent, validate_and_normalize};
use crate::error::Result;
use crate::number::NumericInput;

/// The plain values carried by a [`Paint`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintValues {
    pub foreground: Color,
    pub background: Color,
    pub stroke_width: f64,
}

#[derive(Clone, Default)]
pub struct Paint {
    inner: Rc<RefCell<PaintValues>>,
}

impl Paint {
    /// Transparent black foreground and background, zero stroke width.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: PaintValues) -> Self {
        Self {
            inner: Rc::new(RefCell::new(values)),
        }
    }

    pub fn values(&self) -> PaintValues {
        *self.inner.borrow()
    }

    pub fn foreground_color(&self) -> Color {
        self.inner.borrow().foreground
    }

    pub fn background_color(&self) -> Color {
        self.inner.borrow().background
    }

    pub fn stroke_width(&self) -> f64 {
        self.inner.borrow().stroke_width
    }

    /// Validates `components` before touching the paint; on error the
    /// previous color is kept. Components must be integers:
    ///
    /// ```compile_fail
    /// scribe::Paint::new().set_foreground_color(&[true, true, false, true]);
    /// ```
    pub fn set_foreground_color<T: ColorComponent>(&self, components: &[T]) -> Result<()> {
        let color = validate_and_normalize(components)?;
        self.set_foreground(color);
        Ok(())
    }

    pub fn set_background_color<T: ColorComponent>(&self, components: &[T]) -> Result<()> {
        let color = validate_and_normalize(components)?;
        self.set_background(color);
        Ok(())
    }

    pub fn set_foreground(&self, color: Color) {
        self.inner.borrow_mut().foreground = color;
    }

    pub fn set_background(&self, color: Color) {
        self.inner.borrow_mut().background = color;
    }

    /// Negative widths are stored as given.
    pub fn set_stroke_width(&self, width: impl Into<NumericInput>) -> Result<()> {
        let width = width.into().to_f64("stroke width")?;
        self.inner.borrow_mut().stroke_width = width;
        Ok(())
    }

    /// A new paint with the current values and no link back to `self`.
    pub fn snapshot(&self) -> Paint {
        Paint::from_values(self.values())
    }

    /// Whether both handles point at the same paint.
    pub fn ptr_eq(&self, other: &Paint) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Paint").field(&*self.inner.borrow()).finish()
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values();
        write!(
            f,
            "<paint fg {:?} bg {:?} stroke {}>",
            <(u8, u8, u8, u8)>::from(values.foreground),
            <(u8, u8, u8, u8)>::from(values.background),
            values.stroke_width
        )
    }
}
