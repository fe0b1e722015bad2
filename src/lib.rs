pub mod canvas;
#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod number;
pub mod paint;
pub mod render;
pub mod script;
pub mod shape;
pub mod store;

pub use canvas::Canvas;
#[cfg(feature = "cli")]
pub use cli::run;
pub use color::{Color, ColorComponent, validate_and_normalize};
pub use config::{Config, PaintConfig, RenderConfig, load_config};
pub use document::{Element, render};
pub use error::{Result, ScribeError};
pub use number::NumericInput;
pub use paint::{Paint, PaintValues};
pub use render::{render_svg, write_svg};
pub use script::{Drawing, run_script};
pub use shape::{Geometry, Shape, ShapeId, ShapeKind};
pub use store::ShapeStore;
