//! Color mapping and display surfaces

pub mod colormap;
pub mod display;

pub use colormap::{Colormap, Raster, Rgb};
pub use display::{DisplaySurface, PngWriter, TerminalViewer, TerminalViewerConfig};
