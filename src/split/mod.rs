pub mod fragment;
pub mod walker;

pub use fragment::{parse_header, split_fragments, ManifestHeader, SEPARATOR};
pub use walker::{output_file_name, split_tree, SplitOptions, SplitSummary};
