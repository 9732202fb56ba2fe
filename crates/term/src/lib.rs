//! Terminal rendering module.
//!
//! Behaviors draw sprites into a persistent [`FrameBuffer`] through the
//! [`Canvas`] trait; [`TerminalRenderer`] flushes the buffer to the real
//! terminal once per tick, writing only the cells that changed.
//!
//! - [`fb`]: cells, styles, the framebuffer and the `Canvas` surface
//! - [`draw`]: sprite drawing and erasing with clipping
//! - [`renderer`]: crossterm output

pub mod draw;
pub mod fb;
pub mod renderer;

pub use space_garbage_core as core;
pub use space_garbage_types as types;

pub use draw::{draw_frame, is_drawable, put_glyph, put_text};
pub use fb::{Canvas, Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_frame_into, encode_full_into, TerminalRenderer};
