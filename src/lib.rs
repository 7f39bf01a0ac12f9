#![warn(clippy::all, rust_2018_idioms)]

//! Raster paint surface core: a fixed-size pixel buffer, the input
//! state machine that turns pointer events into pixel edits or live
//! shape guides, and a one-shot PNG export gate. Window creation, the
//! per-frame present loop and the tool menu are the host's business;
//! it reads the canvas through [`CanvasSnapshot`].

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod guide;
pub mod input;
pub mod raster;
pub mod tool;

pub use buffer::{Patch, PixelBuffer};
pub use canvas::{Border, Canvas, CanvasSnapshot};
pub use color::{ChannelOrder, PixelFormat, color_from_rgb24};
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use export::ExportGate;
pub use geometry::IRect;
pub use guide::{CircleGuide, LineGuide, RectGuide};
pub use input::{DragState, InputEvent, InputRouter, PointerState};
pub use tool::Tool;
