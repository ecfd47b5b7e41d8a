use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use glyph_editor::{Coordinates, Editor, MonospaceMeasure, Viewport};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        if i % 50 == 0 {
            out.push_str("/* block comment\n   spanning lines */\n");
        }
        out.push_str(&format!(
            "float4 value{i} = saturate(tex2D(s, uv) * {i}.5f); // line {i}\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_load_and_colorize(c: &mut Criterion) {
    let text = large_text(20_000);
    c.bench_function("load_and_colorize/20k_lines", |b| {
        b.iter(|| {
            let mut editor = Editor::new();
            editor.set_text(black_box(&text));
            editor.colorize_all();
            black_box(editor.total_lines());
        })
    });
}

fn bench_typing_in_middle(c: &mut Criterion) {
    let text = large_text(20_000);
    c.bench_function("typing_middle/100_chars", |b| {
        b.iter_batched(
            || {
                let mut editor = Editor::new();
                editor.set_text(&text);
                editor.colorize_all();
                editor.set_cursor_position(Coordinates::new(10_000, 8));
                editor
            },
            |mut editor| {
                for _ in 0..100 {
                    editor.enter_character('x', false);
                    editor.colorize_step();
                }
                black_box(editor.cursor_position());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let text = large_text(20_000);
    let mut editor = Editor::new();
    editor.set_text(&text);
    editor.colorize_all();

    let measure = MonospaceMeasure::default();
    let viewport = Viewport {
        scroll_y: 10_000.0 * measure.line_height,
        width: 1200.0,
        height: 60.0 * measure.line_height,
        focused: true,
        ..Viewport::default()
    };

    c.bench_function("render/60_lines", |b| {
        b.iter(|| {
            let frame = editor.render(black_box(&viewport), &measure);
            black_box(frame.lines.len());
        })
    });
}

fn bench_undo_redo(c: &mut Criterion) {
    c.bench_function("undo_redo/500_edits", |b| {
        b.iter_batched(
            || {
                let mut editor = Editor::new();
                for i in 0..500 {
                    editor.insert_text(if i % 10 == 9 { "\n" } else { "ab" });
                }
                editor
            },
            |mut editor| {
                editor.undo(500);
                editor.redo(500);
                black_box(editor.total_lines());
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_load_and_colorize,
    bench_typing_in_middle,
    bench_render_frame,
    bench_undo_redo
);
criterion_main!(benches);
