use criterion::{Criterion, criterion_group, criterion_main};
use slash_comment_engine::{
    SelectionRange, Span, TextBuffer, ViewState, build_decorations, render_markdown,
    update_reading_mode,
};
mod common;

fn bench_reading_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_mode");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let rendered = render_markdown(&content);
    group.bench_function("update_reading_mode", |b| {
        b.iter(|| {
            let mut root = rendered.clone();
            update_reading_mode(&mut root);
            std::hint::black_box(root);
        });
    });

    group.finish();
}

fn bench_live_decorations(c: &mut Criterion) {
    let mut group = c.benchmark_group("live");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let buffer = TextBuffer::from(content.as_str());
    let viewport_end = buffer.line(60).map(|l| l.end()).unwrap_or(buffer.len());

    let full = ViewState::new(buffer.clone()).with_selection([SelectionRange::cursor(0)]);
    group.bench_function("build_decorations_full", |b| {
        b.iter(|| std::hint::black_box(build_decorations(&full)));
    });

    let viewport = ViewState::new(buffer)
        .with_visible_ranges([Span::new(0, viewport_end)])
        .with_selection([SelectionRange::cursor(0)]);
    group.bench_function("build_decorations_viewport", |b| {
        b.iter(|| std::hint::black_box(build_decorations(&viewport)));
    });

    group.finish();
}

criterion_group!(benches, bench_reading_mode, bench_live_decorations);
criterion_main!(benches);
