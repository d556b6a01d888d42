//! Immediate-mode layout engine for character-grid displays.
//!
//! Each frame the caller declares a tree of containers and leaves, then calls
//! [`LayoutContext::finish`] to measure, resolve and position every node and
//! hand the visible ones to a [`Renderer`]. Nothing survives to the next frame.
//!
//! ```
//! use room_layout::{Alignment, LayoutConfig, LayoutContext, RecordingRenderer, Rect, Sizing, Style};
//!
//! let mut ctx = LayoutContext::new();
//! ctx.reset(Rect::new(0, 0, 80, 24));
//! ctx.begin_container(LayoutConfig::row().with_alignment(Alignment::center()));
//! let title = ctx.add_text(
//!     LayoutConfig::new().with_size(Sizing::fixed(10), Sizing::fixed(1)),
//!     "room",
//!     Style::new(),
//! );
//! ctx.end_container()?;
//!
//! let mut renderer = RecordingRenderer::new();
//! ctx.finish(&mut renderer)?;
//! assert_eq!(ctx.rect_of(title), Some(Rect::new(35, 11, 10, 1)));
//! # Ok::<(), room_layout::LayoutError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod text;

pub use config::{EngineConfig, NestingPolicy};
pub use error::{LayoutError, Result};
pub use geometry::{Offset, Rect, Size};
pub use layout::{
    Alignment, Axis, Direction, HAlign, LayoutConfig, LayoutContext, LayoutNode, NodeId,
    NodeSnapshot, Overflow, Padding, RenderCommand, Sizing, VAlign,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{FrameStats, LayoutMetrics, MetricSnapshot};
pub use render::{
    AnsiRenderer, BorderKind, DrawCall, NullRenderer, RecordingRenderer, Renderer,
    RendererSettings, Style,
};
pub use text::{DisplayWidth, TextMeasure, display_width, measure_wrapped};
