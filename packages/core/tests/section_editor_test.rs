//! Section Editor Behaviour Tests
//!
//! Drives a `SectionEditor` the way a user would: typing into controls and
//! pressing move/remove buttons, then checks the model and the rebuilt tree.

#[cfg(test)]
mod section_editor_tests {
    use article_editor_core::editor::{EditorAction, ListKind, SectionEditor, UploadOutcome};
    use article_editor_core::models::{
        ArticleBody, BlockId, BlockKind, BlockPatch, ContentBlock, GalleryImage,
    };
    use article_editor_core::render::{ControlTree, FieldSelector};
    use article_editor_core::sequence::MutationOutcome;
    use article_editor_core::EditorConfig;
    use serde_json::json;

    fn editor_with(blocks: Vec<ContentBlock>) -> SectionEditor {
        SectionEditor::open(ArticleBody::new(blocks, vec![]), EditorConfig::default())
    }

    fn abc() -> SectionEditor {
        editor_with(vec![
            ContentBlock::heading("A"),
            ContentBlock::heading("B"),
            ContentBlock::heading("C"),
        ])
    }

    fn ids<const N: usize>(editor: &SectionEditor) -> [BlockId; N] {
        let ids: Vec<BlockId> = editor.content().entries().iter().map(|entry| entry.id).collect();
        ids.try_into().expect("unexpected block count")
    }

    fn labels(editor: &SectionEditor) -> Vec<String> {
        editor
            .content()
            .iter()
            .map(|block| block.content().unwrap_or_default().to_string())
            .collect()
    }

    fn rendered_labels(editor: &SectionEditor) -> Vec<String> {
        editor
            .content_tree()
            .nodes()
            .iter()
            .map(|node| {
                node.text(FieldSelector::HeadingContent)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_append_order_survives_render_and_read_back() {
        let mut editor = SectionEditor::new(EditorConfig::default());
        let kinds = [
            BlockKind::Heading,
            BlockKind::Paragraph,
            BlockKind::Image,
            BlockKind::Video,
            BlockKind::Quote,
        ];

        let mut appended = Vec::new();
        for kind in kinds {
            appended.push(editor.append_block(kind).unwrap());
        }

        let rendered: Vec<BlockId> = editor
            .content_tree()
            .nodes()
            .iter()
            .map(|node| node.block_id())
            .collect();
        assert_eq!(rendered, appended);

        let body = editor.snapshot();
        let read_back: Vec<BlockKind> = body.content.iter().map(ContentBlock::kind).collect();
        assert_eq!(read_back, kinds);
    }

    #[test]
    fn test_move_up_at_first_index_leaves_model_equal() {
        let mut editor = abc();
        let before = editor.content().clone();
        let first = editor.content().id_at(0).unwrap();

        assert_eq!(editor.move_up(ListKind::Content, first), MutationOutcome::NoOp);
        assert_eq!(editor.content(), &before);
        assert!(!editor.content_tree().nodes()[0].move_up_enabled());
    }

    #[test]
    fn test_reorder_correctness() {
        let mut editor = abc();
        let [a, _b, _c] = ids::<3>(&editor);

        editor.move_down(ListKind::Content, a);
        assert_eq!(labels(&editor), vec!["B", "A", "C"]);

        let at_two = editor.content().id_at(2).unwrap();
        editor.move_up(ListKind::Content, at_two);
        assert_eq!(labels(&editor), vec!["B", "C", "A"]);
        assert_eq!(rendered_labels(&editor), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_unsynced_edit_survives_removal_of_earlier_block() {
        let mut editor = editor_with(vec![
            ContentBlock::paragraph("first"),
            ContentBlock::paragraph(""),
        ]);
        let [first, second] = ids::<2>(&editor);

        // typed but never captured
        assert!(editor.edit_field(
            ListKind::Content,
            second,
            FieldSelector::ParagraphContent,
            "hello".into()
        ));
        assert_eq!(editor.content().get(1), Some(&ContentBlock::paragraph("")));

        editor.remove(ListKind::Content, first);

        assert_eq!(editor.content().len(), 1);
        assert_eq!(editor.content().get(0), Some(&ContentBlock::paragraph("hello")));

        let node = &editor.content_tree().nodes()[0];
        assert_eq!(node.block_id(), second);
        assert_eq!(node.index_attribute(), 0);
        assert_eq!(node.text(FieldSelector::ParagraphContent), Some("hello"));
    }

    #[test]
    fn test_unsynced_edit_follows_its_block_when_moved() {
        let mut editor = abc();
        let c = editor.content().id_at(2).unwrap();

        editor.edit_field(ListKind::Content, c, FieldSelector::HeadingContent, "C!".into());
        editor.move_up(ListKind::Content, c);
        editor.move_up(ListKind::Content, c);

        assert_eq!(labels(&editor), vec!["C!", "A", "B"]);
    }

    #[test]
    fn test_update_ignores_foreign_fields() {
        let mut editor = editor_with(vec![ContentBlock::paragraph("p")]);
        let mut model = editor.content().clone();

        model.update_at(0, &BlockPatch::default().with_author("intruder"));
        assert_eq!(
            serde_json::to_value(model.get(0).unwrap()).unwrap(),
            json!({"type": "paragraph", "content": "p", "lead": false})
        );

        let body = editor.snapshot();
        let stored = serde_json::to_value(&body.content[0]).unwrap();
        assert!(stored.get("author").is_none());
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut editor = abc();
        let [_a, b, c] = ids::<3>(&editor);

        editor.remove(ListKind::Content, b);
        assert_eq!(labels(&editor), vec!["A", "C"]);
        assert_eq!(editor.content_tree().find(c).unwrap().index_attribute(), 1);

        editor.move_up(ListKind::Content, c);
        assert_eq!(labels(&editor), vec!["C", "A"]);
    }

    #[test]
    fn test_upload_for_removed_block_is_dropped() {
        let mut editor = editor_with(vec![
            ContentBlock::heading("A"),
            ContentBlock::image("", "pending"),
            ContentBlock::image("", "other"),
        ]);
        let [_a, pending, other] = ids::<3>(&editor);

        let target = editor
            .upload_target(ListKind::Content, pending, FieldSelector::ImageUrl)
            .unwrap();
        editor.remove(ListKind::Content, pending);
        let before = editor.content().clone();

        let outcome = editor.accept_upload(target, "https://cdn/late.png");

        assert_eq!(outcome, UploadOutcome::Dropped);
        assert_eq!(editor.content(), &before);
        assert_eq!(
            editor.content().get_by_id(other),
            Some(&ContentBlock::image("", "other"))
        );
    }

    #[test]
    fn test_upload_follows_block_across_rebuilds() {
        let mut editor = editor_with(vec![
            ContentBlock::heading("A"),
            ContentBlock::video("", "clip"),
        ]);
        let [a, video] = ids::<2>(&editor);

        let target = editor
            .upload_target(ListKind::Content, video, FieldSelector::VideoUrl)
            .unwrap();
        editor.edit_field(ListKind::Content, video, FieldSelector::VideoCaption, "clip v2".into());
        editor.move_down(ListKind::Content, a);
        assert!(editor.content_tree().generation() > target.generation);

        let outcome = editor.accept_upload(target, "https://cdn/v.mp4");

        assert_eq!(
            outcome,
            UploadOutcome::Applied {
                index: 0,
                rebuilt: true
            }
        );
        let node = editor.content_tree().find(video).unwrap();
        assert_eq!(node.text(FieldSelector::VideoUrl), Some("https://cdn/v.mp4"));
        assert_eq!(
            editor.snapshot().content[0],
            ContentBlock::video("https://cdn/v.mp4", "clip v2")
        );
    }

    #[test]
    fn test_move_down_disablement_is_configurable() {
        let blocks = vec![ContentBlock::heading("A"), ContentBlock::heading("B")];

        let editor = editor_with(blocks.clone());
        assert!(!editor.content_tree().nodes()[1].move_down_enabled());

        let config = EditorConfig {
            disable_move_down_at_end: false,
            ..EditorConfig::default()
        };
        let mut editor = SectionEditor::open(ArticleBody::new(blocks, vec![]), config);
        assert!(editor.content_tree().nodes()[1].move_down_enabled());

        // the model stays a no-op either way
        let last = editor.content().id_at(1).unwrap();
        assert_eq!(editor.move_down(ListKind::Content, last), MutationOutcome::NoOp);
    }

    #[test]
    fn test_gallery_is_independent_of_body() {
        let mut editor = SectionEditor::open(
            ArticleBody::new(
                vec![ContentBlock::heading("A")],
                vec![GalleryImage::new("1.jpg", ""), GalleryImage::new("2.jpg", "")],
            ),
            EditorConfig::default(),
        );
        let heading = editor.content().id_at(0).unwrap();
        let second = editor.gallery().id_at(1).unwrap();
        let content_generation = editor.content_tree().generation();

        editor.edit_field(ListKind::Content, heading, FieldSelector::HeadingContent, "A2".into());
        editor.apply(EditorAction::MoveUp {
            list: ListKind::Gallery,
            id: second,
        });

        assert_eq!(
            editor.gallery().items(),
            vec![GalleryImage::new("2.jpg", ""), GalleryImage::new("1.jpg", "")]
        );
        // body tree untouched: the pending heading edit is still only in the control
        assert_eq!(editor.content_tree().generation(), content_generation);
        assert_eq!(labels(&editor), vec!["A"]);
        assert_eq!(editor.snapshot().content, vec![ContentBlock::heading("A2")]);
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut editor = SectionEditor::new(EditorConfig::default());

        assert!(editor.apply(EditorAction::AppendBlock(BlockKind::Heading)).is_applied());
        assert!(editor.apply(EditorAction::AppendBlock(BlockKind::Quote)).is_applied());
        let quote = editor.content().id_at(1).unwrap();

        assert!(editor
            .apply(EditorAction::MoveUp {
                list: ListKind::Content,
                id: quote
            })
            .is_applied());
        assert_eq!(editor.content().get(0).unwrap().kind(), BlockKind::Quote);

        assert!(editor
            .apply(EditorAction::Remove {
                list: ListKind::Content,
                id: quote
            })
            .is_applied());
        assert_eq!(editor.content().len(), 1);
        assert_eq!(editor.content_tree().len(), 1);
    }
}
