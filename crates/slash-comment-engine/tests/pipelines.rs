use pretty_assertions::assert_eq;
use slash_comment_engine::{
    Element, Node, SelectionRange, Span, StyleClass, Tag, TextBuffer, ViewState,
    build_decorations,
    live::DecorationStyle,
    process_block,
    render::{render_markdown, render_reading_tree, render_reading_view},
    snapshot, update_reading_mode,
};

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn fixture_comments_in_blocks() {
    assert_fixture("comments_in_blocks");
}

#[test]
fn fixture_inline_markup() {
    assert_fixture("inline_markup");
}

fn assert_fixture(name: &str) {
    let dir = fixtures_dir();
    let md = std::fs::read_to_string(format!("{dir}/{name}.md")).unwrap();

    let root = render_reading_tree(&md);
    snapshot::invariants(&root);

    let outline = snapshot::outline(&root);
    insta::with_settings!({
        snapshot_path => dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, outline);
    });
}

#[test]
fn live_decorations_snapshot() {
    let buffer = TextBuffer::from("hello //secret\nplain\nx // y");
    let state = ViewState::new(buffer).with_selection([]);
    let set = build_decorations(&state);

    let dir = fixtures_dir();
    insta::with_settings!({
        snapshot_path => dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_yaml_snapshot!("live_decorations", set.as_slice());
    });
}

/// Partitioning an already partitioned tree changes nothing.
#[test]
fn reading_view_is_idempotent() {
    let mut root = render_reading_tree("a // b\n\n- c // d\n- e");
    let once = root.clone();
    update_reading_mode(&mut root);
    assert_eq!(root, once);
}

#[test]
fn reading_view_html() {
    let html = render_reading_view("keep // note");
    assert_eq!(
        html,
        "<p>keep <span class=\"cm-slash-comment-container\"><span class=\"cm-slash-hide\">// </span><span class=\"cm-slash-comment\">note</span></span></p>\n"
    );
}

#[test]
fn line_break_bounds_the_container() {
    let html = render_reading_view("a //b<br>c");
    assert_eq!(
        html,
        "<p>a <span class=\"cm-slash-comment-container\"><span class=\"cm-slash-hide\">//</span><span class=\"cm-slash-comment\">b</span></span><br>c</p>\n"
    );
}

#[test]
fn soft_break_keeps_remainder_as_text() {
    let html = render_reading_view("x // y\nz");
    assert_eq!(
        html,
        "<p>x <span class=\"cm-slash-comment-container\"><span class=\"cm-slash-hide\">// </span><span class=\"cm-slash-comment\">y</span></span>\nz</p>\n"
    );
}

#[test]
fn code_blocks_are_left_alone() {
    let md = "```\na // b\n```";
    let mut root = render_markdown(md);
    let before = root.clone();
    update_reading_mode(&mut root);
    assert_eq!(root, before);
}

#[test]
fn no_marker_no_mutation() {
    let mut root = render_markdown("nothing to see\n\n# here");
    update_reading_mode(&mut root);
    let containers = root
        .as_element()
        .unwrap()
        .count_elements(&|el| el.has_style(StyleClass::Container));
    assert_eq!(containers, 0);
}

/// Both pipelines agree on where the comment body starts.
#[test]
fn pipelines_agree_on_boundaries() {
    for line in ["x//y", "x// y", "a // b // c", "todo //", "//only", "// "] {
        let mut p = Element::new(Tag::P).with_child(Node::text(line));
        process_block(&mut p);
        let container = p
            .children
            .iter()
            .filter_map(Node::as_element)
            .find(|el| el.has_style(StyleClass::Container))
            .unwrap();
        let body = Node::from(container.children[1].clone()).text_content();

        let state = ViewState::new(TextBuffer::from(line)).with_selection([]);
        let set = build_decorations(&state);
        let live_body = set
            .iter()
            .find(|d| d.style == DecorationStyle::Comment)
            .map(|d| &line[d.from..d.to])
            .unwrap_or("");

        assert_eq!(body, live_body, "line {line:?}");
    }
}

#[test]
fn moving_the_cursor_reveals_the_marker() {
    let text = "intro\nhello //secret\noutro";
    let buffer = TextBuffer::from(text);

    let away = ViewState::new(buffer.clone()).with_selection([SelectionRange::cursor(0)]);
    let spans: Vec<_> = build_decorations(&away)
        .iter()
        .map(|d| (&text[d.from..d.to], d.style))
        .collect();
    assert_eq!(
        spans,
        vec![("//", DecorationStyle::Hidden), ("secret", DecorationStyle::Comment)]
    );

    let on = ViewState::new(buffer).with_selection([SelectionRange::cursor(8)]);
    let spans: Vec<_> = build_decorations(&on)
        .iter()
        .map(|d| (&text[d.from..d.to], d.style))
        .collect();
    assert_eq!(spans, vec![("//secret", DecorationStyle::Comment)]);
}

#[test]
fn viewport_over_long_document_is_sorted() {
    let mut text = String::new();
    for i in 0..200 {
        if i % 3 == 0 {
            text.push_str(&format!("line {i} // note {i}\n"));
        } else {
            text.push_str(&format!("line {i}\n"));
        }
    }
    let buffer = TextBuffer::from(text.as_str());
    let first = buffer.line(20).unwrap().start();
    let last = buffer.line(60).unwrap().end();
    let state = ViewState::new(buffer)
        .with_visible_ranges([Span::new(first, last)])
        .with_selection([]);

    let set = build_decorations(&state);
    // lines 21, 24, ..., 60 carry markers: 14 lines, two ranges each
    assert_eq!(set.len(), 28);
    let starts: Vec<_> = set.iter().map(|d| d.from).collect();
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
    assert!(set.iter().all(|d| d.from >= first && d.to <= last));
}
