//! Chapter metadata model and assembly
//!
//! Segment durations are folded into contiguous millisecond ranges and
//! wrapped in a two-level tree: one table-of-contents node whose children
//! are the chapter nodes, each carrying title, image and URL frames.

mod assembler;
mod error;
pub(crate) mod model;
mod render;

pub use assembler::{
    attach_durations, build_tree, validate, ChapterAssembler, Labels, DEFAULT_TOC_TITLE,
    DEFAULT_URL_DESCRIPTION,
};
pub use model::{
    ChapterDescriptor, ChapterNode, ChapterTree, ImageRole, Node, SubFrame, TocNode,
    TIME_SENTINEL,
};
pub use render::{format_ms, render_tree};
