// src/types/colors.rs
use serde::{Deserialize, Serialize};

/// Text colors carried by rich-text annotations.
///
/// Background variants collapse onto their base color; the exporter keeps
/// the value for completeness but does not render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}
