//! Outline extraction: builders, heading heuristics, and flattening.
//!
//! The builder converts decoded content (a markup element stream or raw
//! text lines) into an [`OutlineNode`](crate::model::OutlineNode) forest;
//! the flattener projects a forest down to the ordered heading sequence the
//! comparison engine consumes.

mod builder;
mod flatten;
mod heading;
mod id;

pub use builder::OutlineBuilder;
pub use flatten::flatten_headings;
pub use heading::{heading_level, is_heading_line, line_level};
pub use id::{
    ContentHashIdGenerator, IdGenerator, IdStrategy, RandomIdGenerator, SequentialIdGenerator,
};
