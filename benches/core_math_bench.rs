use criterion::{Criterion, criterion_group, criterion_main};
use graph_range_slider::api::GraphRangeSlider;
use graph_range_slider::core::{DataPoint, PositionTable, nearest_index};
use graph_range_slider::interaction::HandleSide;
use std::hint::black_box;

fn bench_position_table_10k(c: &mut Criterion) {
    c.bench_function("position_table_10k", |b| {
        b.iter(|| PositionTable::compute(black_box(1920.0), black_box(10_000), black_box(8.0)))
    });
}

fn bench_nearest_index_10k(c: &mut Criterion) {
    let table = PositionTable::compute(1920.0, 10_000, 8.0);

    c.bench_function("nearest_index_10k", |b| {
        b.iter(|| nearest_index(black_box(table.as_slice()), black_box(1_234.5)))
    });
}

fn bench_drag_sweep_1k(c: &mut Criterion) {
    let data: Vec<DataPoint> = (0..1_000)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i % 17)))
        .collect();
    let mut slider = GraphRangeSlider::identified(data, Vec::new());
    slider
        .set_container_width(1920.0)
        .expect("valid container width");

    c.bench_function("drag_sweep_1k", |b| {
        b.iter(|| {
            slider.begin_drag(HandleSide::Right);
            for x in (0..1920).step_by(16) {
                let _ = slider.drag_to(black_box(f64::from(x)));
            }
            let _ = slider.end_drag();
        })
    });
}

criterion_group!(
    benches,
    bench_position_table_10k,
    bench_nearest_index_10k,
    bench_drag_sweep_1k
);
criterion_main!(benches);
