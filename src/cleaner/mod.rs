//! Document cleaning before scoring and content cleaning after selection.

pub mod postprocess;
pub mod preprocess;
pub mod siblings;

pub use postprocess::{clean_html, clean_text, postprocess};
pub use preprocess::preprocess;
pub use siblings::{merge_siblings, should_merge_sibling, ContentBlock};
