// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Placement, QuadTree, QuadTreeConfig, Rect};

const WORLD: Rect = Rect::new(0, 0, 4096, 4096);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: i32) -> i32 {
        debug_assert!(n > 0, "upper bound must be positive, got {n}");
        (self.next_u64() % n as u64) as i32
    }
}

fn gen_grid_rects(n: i32, cell: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(Rect::new(x * cell, y * cell, cell - 1, cell - 1));
        }
    }
    out
}

fn gen_random_rects(count: usize, max_side: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let w = 1 + rng.below(max_side);
        let h = 1 + rng.below(max_side);
        let x = rng.below(WORLD.width - w);
        let y = rng.below(WORLD.height - h);
        out.push(Rect::new(x, y, w, h));
    }
    out
}

fn gen_viewports(count: usize, side: i32) -> Vec<Rect> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            Rect::new(
                rng.below(WORLD.width - side),
                rng.below(WORLD.height - side),
                side,
                side,
            )
        })
        .collect()
}

fn build(rects: &[Rect], placement: Placement) -> QuadTree<Rect> {
    let config = QuadTreeConfig::default().with_placement(placement);
    let mut tree = QuadTree::with_config("bench", WORLD, config).unwrap();
    for r in rects {
        tree.insert(*r).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[32_i32, 64, 128] {
        let rects = gen_grid_rects(n, WORLD.width / n);
        group.throughput(Throughput::Elements((n * n) as u64));
        for placement in [Placement::Legacy, Placement::Repaired] {
            group.bench_function(format!("grid_n{n}_{placement:?}"), |b| {
                b.iter(|| black_box(build(&rects, placement)));
            });
        }
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let rects = gen_random_rects(20_000, 48);
    let viewports = gen_viewports(64, 512);
    group.throughput(Throughput::Elements(viewports.len() as u64));
    for placement in [Placement::Legacy, Placement::Repaired] {
        let tree = build(&rects, placement);
        group.bench_function(format!("viewport_superset_{placement:?}"), |b| {
            let mut out = Vec::with_capacity(4096);
            b.iter(|| {
                let mut total = 0;
                for v in &viewports {
                    out.clear();
                    tree.search_into(v.x, v.y, v.width, v.height, &mut out);
                    total += out.len();
                }
                black_box(total)
            });
        });
        group.bench_function(format!("viewport_exact_{placement:?}"), |b| {
            b.iter(|| {
                let total: usize = viewports
                    .iter()
                    .map(|v| tree.search_overlapping(*v).len())
                    .sum();
                black_box(total)
            });
        });
    }
    group.finish();
}

fn bench_rebuild_per_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let rects = gen_random_rects(5_000, 32);
    let viewport = Rect::new(1024, 1024, 1280, 720);
    group.bench_function("clear_insert_query", |b| {
        let mut tree = build(&[], Placement::Legacy);
        b.iter(|| {
            tree.clear();
            for r in &rects {
                tree.insert(*r).unwrap();
            }
            black_box(tree.search_overlapping(viewport).len())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_rebuild_per_frame);
criterion_main!(benches);
