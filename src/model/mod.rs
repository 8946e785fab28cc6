// src/model/mod.rs
//! Domain model of the remote content tree.

mod block;
pub mod blocks;
pub mod common;
mod page;
pub mod properties;

pub use block::Block;
pub use blocks::*;
pub use common::*;
pub use page::PageRecord;
pub use properties::{extract_properties, extract_relations, PageProperties, PageRelations};
