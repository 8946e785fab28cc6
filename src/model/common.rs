use crate::types::NotionId;
use serde::{Deserialize, Serialize};

/// Where a block or page hangs in the remote tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parent {
    Page(NotionId),
    Block(NotionId),
    Database(NotionId),
    Workspace,
}

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: NotionId,
    pub parent: Option<Parent>,
    pub has_children: bool,
    pub archived: bool,
    pub in_trash: bool,
}

impl BlockCommon {
    pub fn new(id: NotionId) -> Self {
        Self {
            id,
            parent: None,
            has_children: false,
            archived: false,
            in_trash: false,
        }
    }

    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Archived or trashed blocks are soft-deleted remotely.
    pub fn is_deleted(&self) -> bool {
        self.archived || self.in_trash
    }
}
