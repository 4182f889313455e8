//! Rendering adapters

mod pixmap;

pub use pixmap::{write_png, PixmapRenderer};
