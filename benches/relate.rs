mod utils;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use planar_kernel::algorithms::PuntalRelateEngine;
use planar_kernel::from_wkt::parse_wkt_one;
use planar_kernel::{Envelope, GeometryRelate};
use utils::get_random_points;

pub fn relate_benchmark(c: &mut Criterion) {
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let rect = parse_wkt_one("POLYGON ((0 0, 100 0, 100 100, 0 100, 0 0))").unwrap();
    let star = parse_wkt_one(
        "POLYGON ((50 0, 61 35, 98 35, 68 57, 79 91, 50 70, 21 91, 32 57, 2 35, 39 35, 50 0))",
    )
    .unwrap();
    let query_points = get_random_points(Envelope::new(-20., 120., -20., 120.), 1000, 342);

    let mut group = c.benchmark_group("relate");
    group.bench_function("rectangle_intersects", |b| {
        b.iter(|| {
            for point in &query_points {
                black_box(relate.intersects(&rect, point)).unwrap();
            }
        })
    });
    group.bench_function("polygon_contains", |b| {
        b.iter(|| {
            for point in &query_points {
                black_box(relate.contains(&star, point)).unwrap();
            }
        })
    });
    group.bench_function("polygon_relate", |b| {
        b.iter(|| {
            for point in &query_points {
                black_box(relate.relate(point, &star)).unwrap();
            }
        })
    });
    group.finish();
}

criterion_group!(benches, relate_benchmark);

criterion_main!(benches);
