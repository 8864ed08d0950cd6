use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag as MdTag, TagEnd};

use crate::tree::{Element, Node, Tag};

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Renders Markdown into a content tree wrapped in a root `div`.
///
/// Soft breaks stay inside text as `\n`, the same way a browser keeps them in
/// one text node. Hard breaks (and inline `<br>`) become [`Node::LineBreak`].
pub fn render_markdown(src: &str) -> Node {
    let mut stack = vec![Element::new(Tag::Div)];
    let mut in_table_head = false;

    for event in Parser::new_ext(src, options()) {
        match event {
            Event::Start(tag) => open(tag, &mut stack, &mut in_table_head),
            Event::End(end) => close(end, &mut stack, &mut in_table_head),
            Event::Text(text) => top(&mut stack).push_text(&text),
            Event::Code(code) => {
                let mut el = Element::new(Tag::Code);
                el.push_text(&code);
                top(&mut stack).children.push(el.into());
            }
            Event::SoftBreak => top(&mut stack).push_text("\n"),
            Event::HardBreak => top(&mut stack).children.push(Node::LineBreak),
            Event::InlineHtml(html) if is_br(&html) => {
                top(&mut stack).children.push(Node::LineBreak);
            }
            Event::Html(html) | Event::InlineHtml(html) => top(&mut stack).push_text(&html),
            Event::Rule => top(&mut stack).children.push(Element::new(Tag::Hr).into()),
            Event::TaskListMarker(checked) => {
                top(&mut stack).push_text(if checked { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }

    // Unbalanced input cannot come out of the parser, but fold any leftovers.
    while stack.len() > 1 {
        pop_into_parent(&mut stack);
    }
    match stack.pop() {
        Some(root) => root.into(),
        None => Element::new(Tag::Div).into(),
    }
}

fn top(stack: &mut [Element]) -> &mut Element {
    match stack.last_mut() {
        Some(el) => el,
        None => unreachable!("root element is never popped while rendering"),
    }
}

fn is_br(html: &str) -> bool {
    let compact: String = html
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    matches!(compact.as_str(), "<br>" | "<br/>")
}

fn open(tag: MdTag<'_>, stack: &mut Vec<Element>, in_table_head: &mut bool) {
    let el = match tag {
        MdTag::Paragraph => Element::new(Tag::P),
        MdTag::Heading { level, .. } => Element::new(Tag::H(level as u8)),
        MdTag::BlockQuote(_) => Element::new(Tag::Blockquote),
        MdTag::CodeBlock(kind) => {
            stack.push(Element::new(Tag::Pre));
            let code = Element::new(Tag::Code);
            match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                    code.with_class(format!("language-{lang}"))
                }
                _ => code,
            }
        }
        MdTag::List(Some(start)) if start != 1 => {
            Element::new(Tag::Ol).with_attr("start", start.to_string())
        }
        MdTag::List(Some(_)) => Element::new(Tag::Ol),
        MdTag::List(None) => Element::new(Tag::Ul),
        MdTag::Item => Element::new(Tag::Li),
        MdTag::Table(_) => Element::new(Tag::Table),
        MdTag::TableHead => {
            *in_table_head = true;
            stack.push(Element::new(Tag::Thead));
            Element::new(Tag::Tr)
        }
        MdTag::TableRow => Element::new(Tag::Tr),
        MdTag::TableCell if *in_table_head => Element::new(Tag::Th),
        MdTag::TableCell => Element::new(Tag::Td),
        MdTag::Emphasis => Element::new(Tag::Em),
        MdTag::Strong => Element::new(Tag::Strong),
        MdTag::Strikethrough => Element::new(Tag::Del),
        MdTag::Link { dest_url, title, .. } => {
            let a = Element::new(Tag::A).with_attr("href", dest_url.to_string());
            if title.is_empty() {
                a
            } else {
                a.with_attr("title", title.to_string())
            }
        }
        MdTag::Image { dest_url, .. } => {
            Element::new(Tag::Img).with_attr("src", dest_url.to_string())
        }
        _ => Element::new(Tag::Div),
    };
    stack.push(el);
}

fn close(end: TagEnd, stack: &mut Vec<Element>, in_table_head: &mut bool) {
    match end {
        TagEnd::CodeBlock => {
            pop_into_parent(stack);
            pop_into_parent(stack);
        }
        TagEnd::TableHead => {
            *in_table_head = false;
            pop_into_parent(stack);
            pop_into_parent(stack);
        }
        TagEnd::Image => {
            if let Some(img) = stack.last_mut() {
                let alt = Node::from(Element::new(Tag::Span).with_children(img.children.drain(..)))
                    .text_content();
                img.attrs.push(("alt".to_string(), alt));
            }
            pop_into_parent(stack);
        }
        _ => pop_into_parent(stack),
    }
}

fn pop_into_parent(stack: &mut Vec<Element>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(el) = stack.pop() {
        top(stack).children.push(el.into());
    }
}
