// src/model/block.rs
use super::blocks::*;
use super::common::BlockCommon;
use crate::types::NotionId;
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::File($pattern) => $result,
            Block::Bookmark($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::TableRow($pattern) => $result,
            Block::LinkToPage($pattern) => $result,
            Block::ChildPage($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// One unit of remote content. Exactly one payload per block, selected by
/// the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Quote(TextBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Divider(DividerBlock),
    Image(ImageBlock),
    File(FileBlock),
    Bookmark(BookmarkBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    LinkToPage(LinkToPageBlock),
    ChildPage(ChildPageBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &NotionId {
        &self.common().id
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Check if block has children
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// The API name of the block type, e.g. `"bulleted_list_item"`.
    ///
    /// Unsupported blocks report the type tag they arrived with.
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Divider(_) => "divider",
            Block::Image(_) => "image",
            Block::File(_) => "file",
            Block::Bookmark(_) => "bookmark",
            Block::Table(_) => "table",
            Block::TableRow(_) => "table_row",
            Block::LinkToPage(_) => "link_to_page",
            Block::ChildPage(_) => "child_page",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// List items are the only blocks whose nested children are indented.
    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::BulletedListItem(_) | Block::NumberedListItem(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RichTextItem;

    fn id(hex: char) -> NotionId {
        NotionId::parse(&hex.to_string().repeat(32)).unwrap()
    }

    #[test]
    fn block_type_names_follow_the_api() {
        let paragraph = Block::Paragraph(TextBlock {
            common: BlockCommon::new(id('a')),
            rich_text: vec![RichTextItem::plain_text("hi")],
        });
        assert_eq!(paragraph.block_type(), "paragraph");
        assert!(!paragraph.is_list_item());

        let unknown = Block::Unsupported(UnsupportedBlock {
            common: BlockCommon::new(id('b')),
            block_type: "synced_block".to_string(),
        });
        assert_eq!(unknown.block_type(), "synced_block");
    }

    #[test]
    fn common_fields_are_shared_across_variants() {
        let item = Block::BulletedListItem(TextBlock {
            common: BlockCommon::new(id('c')).with_children(),
            rich_text: Vec::new(),
        });
        assert!(item.has_children());
        assert!(item.is_list_item());
        assert_eq!(item.id(), &id('c'));
    }
}
