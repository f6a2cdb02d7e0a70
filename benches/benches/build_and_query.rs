// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cardinal_quadtree::{LeafFilter, Tree};
use cardinal_raster::BitRaster;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn checkerboard(size: i32, block: i32) -> BitRaster {
    BitRaster::from_fn(size, |x, y| (x / block + y / block) % 2 == 1)
}

fn random_raster(size: i32, seed: u64, density: u64) -> BitRaster {
    let mut rng = Rng::new(seed);
    BitRaster::from_fn(size, |_, _| rng.next_u64() % 16 < density)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in [64_i32, 128, 256] {
        let raster = checkerboard(size, 4);
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        group.bench_function(format!("checkerboard_{size}"), |b| {
            b.iter(|| Tree::new(black_box(&raster), 1).unwrap());
        });
    }
    for density in [2_u64, 6] {
        let raster = random_raster(128, 0xC0FF_EE11, density);
        group.throughput(Throughput::Elements(128 * 128));
        group.bench_function(format!("random_128_d{density}"), |b| {
            b.iter(|| Tree::new(black_box(&raster), 1).unwrap());
        });
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let raster = random_raster(256, 0xDECA_F000, 4);
    let tree = Tree::new(&raster, 1).unwrap();

    let mut group = c.benchmark_group("locate");
    group.throughput(Throughput::Elements(256 * 256));
    group.bench_function("sweep_256", |b| {
        b.iter(|| {
            let mut found = 0_usize;
            for y in 0..256 {
                for x in 0..256 {
                    if tree.locate(black_box(x), black_box(y)).is_some() {
                        found += 1;
                    }
                }
            }
            found
        });
    });
    group.finish();
}

fn bench_neighbours(c: &mut Criterion) {
    let raster = random_raster(128, 0xFEED_5EED, 4);
    let tree = Tree::new(&raster, 1).unwrap();
    let leaves: Vec<_> = tree.leaves(LeafFilter::default()).collect();

    let mut group = c.benchmark_group("neighbours");
    group.throughput(Throughput::Elements(leaves.len() as u64));
    group.bench_function("walk_all_leaves", |b| {
        b.iter(|| {
            let mut visited = 0_usize;
            for &leaf in &leaves {
                tree.for_each_neighbour(leaf, |_| visited += 1);
            }
            visited
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_locate, bench_neighbours);
criterion_main!(benches);
