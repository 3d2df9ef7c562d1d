//! Incremental text search over a live terminal scrollback buffer
//!
//! The centerpiece is [`search::Search`]: one search term, one direction, a
//! fixed snapshot of every match, and a cursor that cycles through them. The
//! buffer it searches keeps changing; instead of locking it the session keeps
//! the buffer's mutation counter and reports itself stale when it moves.
//!
//! ## Pieces
//! - [`render_data::RenderData`]: what a search needs from a terminal (text
//!   scan, mutation counter, coordinate translation, selection, coloring)
//! - [`terminal::Terminal`]: a shareable grid + cursor + selection that
//!   implements it
//! - [`grid::Grid`]: cells with circular scrollback, soft-wrap flags, line
//!   renditions (double-width rows) and the mutation counter
//! - [`point`]: buffer/screen positions and inclusive match spans
//! - [`config`]: YAML/JSON configuration for terminal size and search defaults
//!
//! ## Coordinates
//! Buffer coordinates index the logical text (scrollback rows first, then the
//! screen). Screen coordinates are what the renderer draws; they differ on
//! double-width rows, where each cell covers two columns.

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod point;
pub mod render_data;
pub mod search;
pub mod terminal;

pub use cell::TextAttribute;
pub use error::{Error, Result};
pub use point::{Point, PointSpan};
pub use render_data::RenderData;
pub use search::Search;
pub use terminal::Terminal;
