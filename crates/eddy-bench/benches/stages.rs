//! Criterion micro-benchmarks for individual solver stages at N=128.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use eddy_core::Boundary;
use eddy_grid::SquareGrid;
use eddy_solver::{advect, project, relax, DEFAULT_ITERATIONS};
use eddy_test_utils::{gaussian_bump, random_field};

fn bench_relax(c: &mut Criterion) {
    let g = SquareGrid::default();
    let x0 = random_field(g, 1, 1.0);
    let mut x = vec![0.0; g.cell_count()];

    c.bench_function("relax_20_sweeps_128", |b| {
        b.iter(|| {
            relax(g, Boundary::Scalar, &mut x, &x0, 1.0, 4.0, DEFAULT_ITERATIONS);
            black_box(x[g.idx(64, 64)]);
        });
    });
}

fn bench_project(c: &mut Criterion) {
    let g = SquareGrid::default();
    let u0 = gaussian_bump(g, 64.0, 64.0, 4.0, 1.0);
    let mut u = u0.clone();
    let mut v = vec![0.0; g.cell_count()];
    let mut p = vec![0.0; g.cell_count()];
    let mut div = vec![0.0; g.cell_count()];

    c.bench_function("project_128", |b| {
        b.iter(|| {
            u.copy_from_slice(&u0);
            project(g, &mut u, &mut v, &mut p, &mut div, DEFAULT_ITERATIONS);
            black_box(u[g.idx(64, 64)]);
        });
    });
}

fn bench_advect(c: &mut Criterion) {
    let g = SquareGrid::default();
    let d0 = random_field(g, 2, 10.0);
    let u = random_field(g, 3, 1.0);
    let v = random_field(g, 4, 1.0);
    let mut d = vec![0.0; g.cell_count()];

    c.bench_function("advect_128", |b| {
        b.iter(|| {
            advect(g, Boundary::Scalar, &mut d, &d0, &u, &v, 0.016);
            black_box(d[g.idx(64, 64)]);
        });
    });
}

criterion_group!(benches, bench_relax, bench_project, bench_advect);
criterion_main!(benches);
