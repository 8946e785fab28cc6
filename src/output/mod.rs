// src/output/mod.rs
//! Output handling: document shapes, path policy and the file writer.

mod documents;
mod paths;
mod writer;

pub use documents::{CategoryMetadata, FrontMatter};
pub use paths::{index_document_path, leaf_document_path, page_directory, sanitize_filename};
pub use writer::{create_directory, write_file};
