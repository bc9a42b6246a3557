mod config;
mod name;
mod render;
mod segment;
mod split;

pub use config::NameSyntax;
pub use name::QualifiedName;
pub use render::render_full_name;
pub use segment::{clean_segment, clean_segment_with};
pub use split::{split_segments, split_segments_with};
