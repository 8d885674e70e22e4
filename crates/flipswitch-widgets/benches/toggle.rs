//! Benchmark tests for toggle operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipswitch_core::{Constraints, Event, Point, RecordingCanvas, Widget};
use flipswitch_widgets::{Icon, ToggleConfig, ToggleControl};

fn icon_config() -> ToggleConfig {
    ToggleConfig::new()
        .thumb_off_icon(Icon::new("☾"))
        .thumb_on_icon(Icon::new("☀"))
        .tooltip(true)
}

fn bench_toggle_creation(c: &mut Criterion) {
    c.bench_function("toggle_new", |b| {
        b.iter(|| ToggleControl::new(black_box(ToggleConfig::default())))
    });
}

fn bench_toggle_measure(c: &mut Criterion) {
    let toggle = ToggleControl::default();
    let constraints = Constraints::new(0.0, 200.0, 0.0, 50.0);

    c.bench_function("toggle_measure", |b| {
        b.iter(|| toggle.measure(black_box(constraints)))
    });
}

fn bench_toggle_click(c: &mut Criterion) {
    let mut toggle = ToggleControl::default().on_toggle(|on| {
        let _ = black_box(on);
    });

    c.bench_function("toggle_click", |b| b.iter(|| toggle.click()));
}

fn bench_toggle_render(c: &mut Criterion) {
    let toggle = ToggleControl::new(icon_config());

    c.bench_function("toggle_render_with_icons", |b| b.iter(|| toggle.render()));
}

fn bench_toggle_paint(c: &mut Criterion) {
    let toggle = ToggleControl::new(icon_config());

    c.bench_function("toggle_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            toggle.paint(&mut canvas);
            canvas
        })
    });
}

fn bench_toggle_hover(c: &mut Criterion) {
    let mut toggle = ToggleControl::new(icon_config());
    let inside = Event::MouseMove {
        position: toggle.wrapper_bounds().center(),
    };
    let outside = Event::MouseMove {
        position: Point::new(500.0, 500.0),
    };

    c.bench_function("toggle_hover_in_out", |b| {
        b.iter(|| {
            toggle.event(black_box(&inside));
            toggle.event(black_box(&outside));
        })
    });
}

fn bench_config_from_yaml(c: &mut Criterion) {
    let yaml = "trackHeight: 20px\ntrackWidth: 3em\nthumbSize: 18\ntooltip: true\n";

    c.bench_function("config_from_yaml", |b| {
        b.iter(|| ToggleConfig::from_yaml_str(black_box(yaml)))
    });
}

criterion_group!(
    benches,
    bench_toggle_creation,
    bench_toggle_measure,
    bench_toggle_click,
    bench_toggle_render,
    bench_toggle_paint,
    bench_toggle_hover,
    bench_config_from_yaml,
);
criterion_main!(benches);
