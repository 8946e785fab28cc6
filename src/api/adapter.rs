// src/api/adapter.rs
//! Adapter layer for converting notion-client types to our domain model.
//!
//! Block payloads are decoded with notion-client's serde types and then
//! narrowed to the closed [`Block`] sum type. Anything notion-client cannot
//! decode, or that the exporter does not render, becomes
//! [`Block::Unsupported`] carrying the raw type tag, so one odd block never
//! fails a whole page.

use crate::error::AppError;
use crate::model::blocks::*;
use crate::model::common::{BlockCommon, Parent};
use crate::model::Block;
use crate::types::{Annotations, Color, MentionTarget, NotionId, RichTextItem, RichTextType};
use notion_client::objects::block::{Block as NotionBlock, BlockType};
use notion_client::objects::rich_text::RichText as NcRichText;
use serde_json::Value;

/// Decodes one raw block object from a block-children listing.
pub fn decode_block(value: Value) -> Result<Block, AppError> {
    let common = decode_block_common(&value)?;
    let raw_type = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    match serde_json::from_value::<NotionBlock>(value) {
        Ok(block) => Ok(convert_block_type(common, block.block_type, raw_type)),
        Err(err) => {
            log::warn!(
                "Could not decode {} block {}: {}",
                raw_type,
                common.id,
                err
            );
            Ok(Block::Unsupported(UnsupportedBlock {
                common,
                block_type: raw_type,
            }))
        }
    }
}

/// Reads identity, parent and flags straight from the JSON object.
fn decode_block_common(value: &Value) -> Result<BlockCommon, AppError> {
    let raw_id = value
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::InvalidId("block without an id".to_string()))?;

    let flag = |name: &str| value.get(name).and_then(Value::as_bool).unwrap_or(false);

    Ok(BlockCommon {
        id: NotionId::parse(raw_id)?,
        parent: value.get("parent").and_then(decode_parent),
        has_children: flag("has_children"),
        archived: flag("archived"),
        in_trash: flag("in_trash"),
    })
}

fn decode_parent(value: &Value) -> Option<Parent> {
    let id_of = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_str)
            .and_then(|raw| NotionId::parse(raw).ok())
    };
    match value.get("type").and_then(Value::as_str)? {
        "page_id" => id_of("page_id").map(Parent::Page),
        "block_id" => id_of("block_id").map(Parent::Block),
        "database_id" => id_of("database_id").map(Parent::Database),
        "workspace" => Some(Parent::Workspace),
        _ => None,
    }
}

fn convert_block_type(common: BlockCommon, block_type: BlockType, raw_type: String) -> Block {
    let text = |common: BlockCommon, rich_text: Vec<NcRichText>| TextBlock {
        common,
        rich_text: convert_rich_text_array(rich_text),
    };

    match block_type {
        BlockType::Paragraph { paragraph } => Block::Paragraph(text(common, paragraph.rich_text)),
        BlockType::Heading1 { heading_1 } => Block::Heading1(text(common, heading_1.rich_text)),
        BlockType::Heading2 { heading_2 } => Block::Heading2(text(common, heading_2.rich_text)),
        BlockType::Heading3 { heading_3 } => Block::Heading3(text(common, heading_3.rich_text)),
        BlockType::BulletedListItem { bulleted_list_item } => {
            Block::BulletedListItem(text(common, bulleted_list_item.rich_text))
        }
        BlockType::NumberedListItem { numbered_list_item } => {
            Block::NumberedListItem(text(common, numbered_list_item.rich_text))
        }
        BlockType::Quote { quote } => Block::Quote(text(common, quote.rich_text)),

        BlockType::ToDo { to_do } => Block::ToDo(ToDoBlock {
            common,
            rich_text: convert_rich_text_array(to_do.rich_text),
            checked: to_do.checked.unwrap_or(false),
        }),

        BlockType::Code { code } => Block::Code(CodeBlock {
            common,
            rich_text: convert_rich_text_array(code.rich_text),
            language: language_tag(&code.language),
        }),

        BlockType::Callout { callout } => Block::Callout(CalloutBlock {
            common,
            rich_text: convert_rich_text_array(callout.rich_text),
            emoji: callout.icon.and_then(emoji_of),
        }),

        BlockType::Divider { .. } => Block::Divider(DividerBlock { common }),

        BlockType::Image { image } => Block::Image(ImageBlock {
            common,
            image: convert_file_object(image.file_type),
        }),

        BlockType::File { file } => Block::File(FileBlock {
            common,
            file: convert_file_object(file.file_type),
        }),

        BlockType::Bookmark { bookmark } => Block::Bookmark(BookmarkBlock {
            common,
            url: bookmark.url,
            caption: convert_rich_text_array(bookmark.caption),
        }),

        BlockType::Table { table } => Block::Table(TableBlock {
            common,
            table_width: table.table_width as usize,
            has_column_header: table.has_column_header,
            has_row_header: table.has_row_header,
        }),

        BlockType::TableRow { table_row } => Block::TableRow(TableRowBlock {
            common,
            cells: table_row
                .cells
                .into_iter()
                .map(convert_rich_text_array)
                .collect(),
        }),

        BlockType::LinkToPage { link_to_page } => match link_to_page {
            notion_client::objects::parent::Parent::PageId { page_id } => {
                match NotionId::parse(&page_id) {
                    Ok(page_id) => Block::LinkToPage(LinkToPageBlock { common, page_id }),
                    Err(err) => {
                        log::warn!("link_to_page {} has an invalid target: {}", common.id, err);
                        unsupported(common, raw_type)
                    }
                }
            }
            _ => unsupported(common, "link_to_page (non-page target)".to_string()),
        },

        BlockType::ChildPage { child_page } => Block::ChildPage(ChildPageBlock {
            common,
            title: child_page.title,
        }),

        _ => unsupported(common, raw_type),
    }
}

fn unsupported(common: BlockCommon, block_type: String) -> Block {
    Block::Unsupported(UnsupportedBlock { common, block_type })
}

/// The lowercase fence tag for a code language, e.g. `"rust"`.
fn language_tag<L: serde::Serialize + std::fmt::Debug>(language: &L) -> String {
    match serde_json::to_value(language) {
        Ok(Value::String(tag)) => tag,
        _ => format!("{:?}", language).to_lowercase(),
    }
}

fn emoji_of(icon: notion_client::objects::block::Icon) -> Option<String> {
    use notion_client::objects::block::Icon as NcIcon;

    match icon {
        NcIcon::Emoji(notion_client::objects::emoji::Emoji::Emoji { emoji }) => Some(emoji),
        NcIcon::File(_) => None,
    }
}

fn convert_file_object(file: notion_client::objects::file::File) -> FileObject {
    use notion_client::objects::file::File as NcFile;

    match file {
        NcFile::External { external } => FileObject::External { url: external.url },
        NcFile::File { file } => FileObject::Hosted {
            url: file.url,
            expiry_time: Some(file.expiry_time),
        },
    }
}

/// Convert array of rich text items
pub fn convert_rich_text_array(rich_texts: Vec<NcRichText>) -> Vec<RichTextItem> {
    rich_texts.into_iter().map(convert_rich_text).collect()
}

/// Convert single rich text item
fn convert_rich_text(rich_text: NcRichText) -> RichTextItem {
    match rich_text {
        NcRichText::Text {
            text,
            annotations,
            plain_text,
            href,
        } => RichTextItem {
            plain_text: plain_text.unwrap_or_else(|| text.content.clone()),
            text_type: RichTextType::Text {
                link: text.link.map(|link| link.url),
            },
            annotations: convert_annotations(annotations.unwrap_or_default()),
            href,
        },

        NcRichText::Mention {
            mention,
            annotations,
            plain_text,
            href,
        } => RichTextItem {
            text_type: RichTextType::Mention(convert_mention(mention)),
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        },

        NcRichText::Equation {
            equation,
            annotations,
            plain_text,
            href,
        } => RichTextItem {
            text_type: RichTextType::Equation {
                expression: equation.expression,
            },
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        },

        _ => RichTextItem::plain_text(""),
    }
}

fn convert_annotations(annotations: notion_client::objects::rich_text::Annotations) -> Annotations {
    Annotations {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        underline: annotations.underline,
        code: annotations.code,
        color: convert_rich_text_color(annotations.color),
    }
}

fn convert_mention(mention: notion_client::objects::rich_text::Mention) -> MentionTarget {
    use notion_client::objects::rich_text::Mention as NcMention;

    match mention {
        NcMention::Page { page } => NotionId::parse(&page.id)
            .map(MentionTarget::Page)
            .unwrap_or(MentionTarget::Other),
        NcMention::Database { database } => NotionId::parse(&database.id)
            .map(MentionTarget::Database)
            .unwrap_or(MentionTarget::Other),
        NcMention::LinkPreview { link_preview } => MentionTarget::Link(link_preview.url),
        _ => MentionTarget::Other,
    }
}

fn convert_rich_text_color(color: notion_client::objects::rich_text::TextColor) -> Color {
    use notion_client::objects::rich_text::TextColor as Nc;

    match color {
        Nc::Default => Color::Default,
        Nc::Gray | Nc::GrayBackground => Color::Gray,
        Nc::Brown | Nc::BrownBackground => Color::Brown,
        Nc::Orange | Nc::OrangeBackground => Color::Orange,
        Nc::Yellow | Nc::YellowBackground => Color::Yellow,
        Nc::Green | Nc::GreenBackground => Color::Green,
        Nc::Blue | Nc::BlueBackground => Color::Blue,
        Nc::Purple | Nc::PurpleBackground => Color::Purple,
        Nc::Pink | Nc::PinkBackground => Color::Pink,
        Nc::Red | Nc::RedBackground => Color::Red,
    }
}
