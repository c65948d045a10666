//! Performance benchmarks for editor core operations
//!
//! Run with: `cargo bench -p article-editor-core`
//!
//! These benchmarks measure the per-action critical path:
//! - Capture of a fully edited control tree
//! - Full rebuild after a structural mutation
//! - Move/remove round trips on long bodies

use article_editor_core::editor::{ListKind, SectionEditor};
use article_editor_core::models::{ArticleBody, ContentBlock, GalleryImage};
use article_editor_core::render::{render_content, FieldSelector, RenderPolicy};
use article_editor_core::sequence::ContentModel;
use article_editor_core::{EditorConfig, SyncEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Generate a body with N blocks cycling through every kind
fn generate_body(block_count: usize) -> ArticleBody {
    let content = (0..block_count)
        .map(|i| match i % 5 {
            0 => ContentBlock::heading(format!("Section {}", i)),
            1 => ContentBlock::paragraph(format!("Paragraph {} with some descriptive text.", i)),
            2 => ContentBlock::image(format!("https://cdn.example.com/{}.jpg", i), "Caption"),
            3 => ContentBlock::video(format!("https://cdn.example.com/{}.mp4", i), ""),
            _ => ContentBlock::quote(format!("Quote {}", i), "Author"),
        })
        .collect();
    let gallery = (0..block_count / 10)
        .map(|i| GalleryImage::new(format!("https://cdn.example.com/g{}.jpg", i), ""))
        .collect();

    ArticleBody::new(content, gallery)
}

fn large_config() -> EditorConfig {
    EditorConfig {
        max_blocks: 10_000,
        ..EditorConfig::default()
    }
}

fn bench_capture(c: &mut Criterion) {
    let body = generate_body(500);
    let mut editor = SectionEditor::open(body, large_config());
    let ids: Vec<_> = editor.content().entries().iter().map(|e| e.id).collect();
    for (i, id) in ids.iter().enumerate().step_by(5) {
        editor.edit_field(
            ListKind::Content,
            *id,
            FieldSelector::HeadingContent,
            format!("Edited {}", i).into(),
        );
    }

    c.bench_function("capture_500_blocks", |b| {
        b.iter(|| {
            let mut model = editor.content().clone();
            black_box(SyncEngine::capture(editor.content_tree(), &mut model))
        })
    });
}

fn bench_rebuild(c: &mut Criterion) {
    let model = ContentModel::from_items(generate_body(500).content);

    c.bench_function("render_500_blocks", |b| {
        b.iter(|| black_box(render_content(&model, RenderPolicy::default())))
    });
}

fn bench_move_round_trip(c: &mut Criterion) {
    let mut editor = SectionEditor::open(generate_body(500), large_config());
    let middle = editor.content().id_at(250).unwrap_or_default();

    c.bench_function("move_up_down_500_blocks", |b| {
        b.iter(|| {
            editor.move_up(ListKind::Content, middle);
            black_box(editor.move_down(ListKind::Content, middle))
        })
    });
}

fn bench_append_remove(c: &mut Criterion) {
    let mut editor = SectionEditor::open(generate_body(200), large_config());

    c.bench_function("append_then_remove_200_blocks", |b| {
        b.iter(|| {
            if let Some(id) = editor.append_content(ContentBlock::paragraph("tail")) {
                black_box(editor.remove(ListKind::Content, id));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_capture,
    bench_rebuild,
    bench_move_round_trip,
    bench_append_remove
);
criterion_main!(benches);
