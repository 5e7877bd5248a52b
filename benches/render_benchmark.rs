//! Performance benchmarks for alert rendering
//!
//! Measures a full draw of the alert overlay at several terminal sizes and
//! configuration shapes. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use tui_alert::{
    render_alert, render_scrim, ActionButton, AlertConfig, AlertState, SharedFlag, SharedText,
    TextFieldParams, ToggleButton,
};

fn plain_config() -> AlertConfig {
    AlertConfig::new(
        "Delete Item",
        ActionButton::new("Cancel", || {}),
        ActionButton::new("Delete", || {}),
    )
    .message("This cannot be undone")
}

fn full_config() -> AlertConfig {
    plain_config()
        .icon("\u{26A0}")
        .text_field(TextFieldParams::new("Name", SharedText::new("Alice")))
        .left_label(ToggleButton::new(
            "Add Favorite",
            "\u{2665}",
            SharedFlag::new(true),
            || {},
        ))
        .right_label(ToggleButton::new(
            "Pin",
            "\u{1F4CC}",
            SharedFlag::new(false),
            || {},
        ))
}

fn bench_render(c: &mut Criterion, name: &str, config: AlertConfig) {
    let mut group = c.benchmark_group(name);
    let mut state = AlertState::new();
    state.sync_visibility(true, &config);

    for (width, height) in [(40u16, 15u16), (80, 30), (160, 50)] {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(width, height),
            |b, &(width, height)| {
                b.iter(|| {
                    terminal
                        .draw(|frame| {
                            let area = Rect::new(0, 0, width, height);
                            render_scrim(frame, area);
                            let rect =
                                render_alert(frame, area, black_box(&config), &state);
                            black_box(rect);
                        })
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_render_plain(c: &mut Criterion) {
    bench_render(c, "alert_render_plain", plain_config());
}

fn bench_render_full(c: &mut Criterion) {
    bench_render(c, "alert_render_full", full_config());
}

criterion_group!(benches, bench_render_plain, bench_render_full);
criterion_main!(benches);
