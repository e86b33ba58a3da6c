use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lbp::local_binary_patterns::{
    local_binary_pattern_map, pattern_point_cloud, uniform_pattern_mask, DEFAULT_MAX_TRANSITIONS,
};
use lbp::utils::gray_bench_image;

fn bench_local_binary_pattern_map(c: &mut Criterion) {
    let image = gray_bench_image(640, 480);

    c.bench_function("local_binary_pattern_map_640x480", |b| {
        b.iter(|| {
            let map = local_binary_pattern_map(black_box(&image));
            black_box(map);
        });
    });
}

fn bench_uniform_pattern_mask(c: &mut Criterion) {
    let map = local_binary_pattern_map(&gray_bench_image(640, 480));

    c.bench_function("uniform_pattern_mask_640x480", |b| {
        b.iter(|| {
            let mask = uniform_pattern_mask(black_box(&map), DEFAULT_MAX_TRANSITIONS);
            black_box(mask);
        });
    });
}

fn bench_pattern_point_cloud(c: &mut Criterion) {
    let map = local_binary_pattern_map(&gray_bench_image(640, 480));
    let targets = [0b11111111, 0b11110000, 0b00001111];

    c.bench_function("pattern_point_cloud_640x480", |b| {
        b.iter(|| {
            let cloud = pattern_point_cloud(black_box(&map), black_box(&targets));
            black_box(cloud.len());
        });
    });
}

criterion_group!(
    benches,
    bench_local_binary_pattern_map,
    bench_uniform_pattern_mask,
    bench_pattern_point_cloud
);
criterion_main!(benches);
