//! Render orchestrator.
//!
//! The layout engine hands paint operations to a [`Renderer`] through a
//! clip-aware walk over the positioned tree. Implementations live alongside:
//! an ANSI writer, a recorder for tests and tooling, and a null sink.

mod ansi;
mod core;
pub(crate) mod emit;
mod style;

pub use ansi::{AnsiRenderer, RendererSettings};
pub use self::core::{DrawCall, NullRenderer, RecordingRenderer, Renderer};
pub use style::{BorderGlyphs, BorderKind, Style};
