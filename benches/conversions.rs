use bowling_layout::layout::{dual_angle_to_two_ls, two_ls_to_dual_angle, vls_to_dual_angle};
use bowling_layout::{adjust_pap, is_plausible, DualAngle, LayoutMarkers, Pap, TwoLs, Vls};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_conversions(c: &mut Criterion) {
    let pap = Pap::new(5.0, 1.0);
    let da = DualAngle::new(40.0, 4.0, 55.0);
    let two = TwoLs::new(4.5, 3.0, 4.5);
    let vls = Vls::new(4.5, 3.5, 2.0);

    c.bench_function("dual_angle_to_two_ls", |b| {
        b.iter(|| dual_angle_to_two_ls(black_box(&da), black_box(&pap)))
    });
    c.bench_function("two_ls_to_dual_angle", |b| {
        b.iter(|| two_ls_to_dual_angle(black_box(&two), black_box(&pap)))
    });
    c.bench_function("vls_to_dual_angle", |b| b.iter(|| vls_to_dual_angle(black_box(&vls))));
}

fn bench_adjust(c: &mut Criterion) {
    let old_pap = Pap::new(5.0, 1.0);
    let new_pap = Pap::new(4.0, 0.5);
    let da = DualAngle::new(40.0, 4.0, 55.0);

    c.bench_function("adjust_pap", |b| {
        b.iter(|| adjust_pap(black_box(&old_pap), black_box(&da), black_box(&new_pap)))
    });
    c.bench_function("place_markers", |b| {
        b.iter(|| LayoutMarkers::place(black_box(&new_pap), black_box(&da), None))
    });
    c.bench_function("is_plausible", |b| {
        b.iter(|| is_plausible(black_box(4.0), black_box(4.0), black_box(5.0), black_box(1.0)))
    });
}

criterion_group!(benches, bench_conversions, bench_adjust);
criterion_main!(benches);
