// src/export/mod.rs
//! Export orchestration: context, slug registry and the tree walker.

mod context;
mod slugs;
mod tree;

pub use context::{ExportContext, ExportSettings};
pub use slugs::SlugRegistry;
pub use tree::{ExportReport, TreeExporter, WrittenPage};
