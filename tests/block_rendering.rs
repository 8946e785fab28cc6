// tests/block_rendering.rs
//! Block rendering against an in-memory workspace: nested lookups for
//! tables, mentions, images and children.

mod support;

use notion2docs::{Annotations, BlockRenderer, RichTextItem};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use support::*;

#[tokio::test]
async fn table_rows_become_an_html_table_with_escaped_pipes() {
    let notion = Arc::new(FakeNotion::new());
    let grid = id(60);
    notion
        .set_children(
            &grid,
            vec![
                table_row(&id(61), &["a|b", "c"]),
                table_row(&id(62), &["d", "e"]),
            ],
        )
        .await;

    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion, assets.path().to_path_buf());
    let rendered = BlockRenderer::new(&ctx)
        .render_blocks(&[table(&grid, 2)], 0)
        .await;

    assert_eq!(
        rendered,
        "<table><tr><th>a&#124;b</th><th>c</th></tr><tr><td>d</td><td>e</td></tr></table>  \n"
    );
}

#[tokio::test]
async fn unreadable_table_renders_a_placeholder() {
    let notion = Arc::new(FakeNotion::new());
    let grid = id(60);
    notion.fail(&grid).await;

    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion, assets.path().to_path_buf());
    let renderer = BlockRenderer::new(&ctx);
    let rendered = renderer.render_blocks(&[table(&grid, 2)], 0).await;

    assert_eq!(rendered, "[Error: Could not fetch table content]\n");
    assert_eq!(renderer.skipped_references(), 1);
}

#[tokio::test]
async fn page_mentions_link_under_the_docs_root() {
    let notion = Arc::new(FakeNotion::new());
    let (intro, guide) = (id(2), id(3));
    notion.add_page(page(&intro, "Intro", "/intro")).await;
    notion.add_page(page(&guide, "Guide", "guide")).await;

    let block = paragraph(
        &id(70),
        vec![
            RichTextItem::plain_text("See "),
            RichTextItem::page_mention(intro, "Intro"),
            RichTextItem::plain_text(" and "),
            RichTextItem::page_mention(guide, "Guide"),
        ],
    );

    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion, assets.path().to_path_buf());
    let rendered = BlockRenderer::new(&ctx).render_blocks(&[block], 0).await;

    assert_eq!(rendered, "See [Intro](/docs/intro) and [Guide](guide)  \n");
}

#[tokio::test]
async fn unresolvable_mention_falls_back_to_its_text() {
    let notion = Arc::new(FakeNotion::new());
    let block = paragraph(
        &id(70),
        vec![RichTextItem::page_mention(id(99), "Gone").with_annotations(Annotations {
            bold: true,
            ..Annotations::default()
        })],
    );

    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion, assets.path().to_path_buf());
    let renderer = BlockRenderer::new(&ctx);
    let rendered = renderer.render_blocks(&[block], 0).await;

    assert_eq!(rendered, "<strong>Gone</strong>  \n");
    assert_eq!(renderer.skipped_references(), 1);
}

#[tokio::test]
async fn nested_list_items_are_indented_with_tabs() {
    let notion = Arc::new(FakeNotion::new());
    let (outer, inner) = (id(80), id(81));
    notion
        .set_children(&outer, vec![bulleted(&inner, "inner", true)])
        .await;
    notion
        .set_children(&inner, vec![bulleted(&id(82), "deepest", false)])
        .await;

    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion, assets.path().to_path_buf());
    let rendered = BlockRenderer::new(&ctx)
        .render_blocks(&[bulleted(&outer, "outer", true), text(&id(83), "after")], 0)
        .await;

    assert_eq!(
        rendered,
        "- outer  \n\t- inner  \n\t\t- deepest  \nafter  \n"
    );
}

#[tokio::test]
async fn children_are_collected_across_result_pages() {
    let notion = Arc::new(FakeNotion::with_page_size(2));
    let parent = id(90);
    notion
        .set_children(
            &parent,
            (0..5)
                .map(|n| text(&id(100 + n), &format!("line {}", n)))
                .collect(),
        )
        .await;

    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion.clone(), assets.path().to_path_buf());
    let rendered = BlockRenderer::new(&ctx)
        .render_children_of(&parent, 0)
        .await
        .unwrap();

    assert_eq!(
        rendered,
        "line 0  \nline 1  \nline 2  \nline 3  \nline 4  \n"
    );
    assert_eq!(notion.request_count(), 3);
}

#[tokio::test]
async fn images_point_at_the_downloaded_asset_or_the_remote_url() {
    let notion = Arc::new(FakeNotion::new());
    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion, assets.path().to_path_buf());

    let rendered = BlockRenderer::new(&ctx)
        .render_blocks(
            &[
                image(&id(110), "https://example.com/ok.png"),
                image(&id(111), "https://example.com/broken.png"),
            ],
            0,
        )
        .await;

    assert_eq!(
        rendered,
        "![image0.png](/docs-images/image0.png)\n\n![](https://example.com/broken.png)\n\n"
    );
}

#[tokio::test]
async fn unsupported_and_child_page_blocks() {
    let notion = Arc::new(FakeNotion::new());
    let assets = tempfile::tempdir().unwrap();
    let ctx = context(notion.clone(), assets.path().to_path_buf());

    let rendered = BlockRenderer::new(&ctx)
        .render_blocks(
            &[
                unsupported(&id(120), "synced_block"),
                child_page(&id(121), "Elsewhere"),
            ],
            0,
        )
        .await;

    assert_eq!(rendered, "[Unsupported block type: synced_block]  \n");
    // Child pages are exported on their own, never fetched inline.
    assert_eq!(notion.request_count(), 0);
}
