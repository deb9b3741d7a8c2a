//! ID3v2 adapter for chapter trees

mod fields;
mod reader;
mod writer;

pub use fields::TaggedChapters;
pub use reader::read_chapters;
pub use writer::write_tree;
