//! Shared plot defaults: where the latest graph is persisted, the default font size
//! and the default qualitative palette.
//!
//! Nothing here touches global state. Build a [`PlotStyle`] and hand it to the
//! context that renders the plot.

mod colormap;
mod config;
mod error;
mod palette;
mod paths;
mod style;

pub use self::colormap::ListedColormap;
pub use self::config::{PaletteSpec, PlotStyleConfig};
pub use self::error::StyleError;
pub use self::palette::{Palette, PaletteName};
pub use self::paths::{latest_graph_path, LATEST_GRAPH_PATH};
pub use self::style::{PlotStyle, DEFAULT_FONT_SIZE};
