// src/formatting/mod.rs
//! Renders Notion blocks into Docusaurus-flavoured Markdown.

pub mod block_renderer;
pub mod rich_text;
pub mod table;

pub use block_renderer::BlockRenderer;
pub use rich_text::{escape_table_cell, render_run};
pub use table::assemble_table;
