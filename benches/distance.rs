use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cylprox::{Point, RightCircularCylinder, Vector};

fn bench_distance(c: &mut Criterion) {
    let cyl = RightCircularCylinder::new(
        Point::new(1.0, -2.0, 0.5),
        Vector::new(0.3, 1.0, -0.7),
        0.75,
        4.0,
    )
    .expect("valid cylinder");

    // One probe per branch of the query
    let within_span = Point::new(1.5, 0.0, 0.0);
    let beyond_cap = Point::new(1.0, -3.0, 1.2);
    let near_rim = Point::new(-2.0, -4.0, 3.0);

    let mut group = c.benchmark_group("cylinder_distance");
    group.bench_function("within_span", |b| {
        b.iter(|| cyl.distance(black_box(&within_span)))
    });
    group.bench_function("beyond_cap", |b| {
        b.iter(|| cyl.distance(black_box(&beyond_cap)))
    });
    group.bench_function("near_rim", |b| b.iter(|| cyl.distance(black_box(&near_rim))));
    group.finish();

    let batch: Vec<Point> = (0..1024)
        .map(|i| {
            let f = f64::from(i) * 0.01;
            Point::new(f.sin() * 3.0, f.cos() * 3.0, f - 5.0)
        })
        .collect();
    c.bench_function("cylinder_distances_1024", |b| {
        b.iter(|| cyl.distances(black_box(&batch)))
    });
}

criterion_group!(benches, bench_distance);
criterion_main!(benches);
