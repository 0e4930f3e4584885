//! Benchmarks for tree assembly: discovery plus the merge/directive
//! algebra that turns a stream of parsed `*.fmf` files into a `Tree`.
//!
//! `assembler::assemble` is the single most expensive step in the
//! pipeline for any non-trivial tree (it re-clones parent data into
//! every child and applies the full operator algebra per key), so it's
//! benchmarked both end-to-end and against trees that stress inheritance
//! depth versus per-node data width independently.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fmf::assembler;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn init_root(root: &Path) {
    fs::create_dir_all(root.join(".fmf")).unwrap();
    fs::write(root.join(".fmf").join("version"), "1\n").unwrap();
}

/// A chain of `depth` nested directories, each inheriting and extending
/// its parent's `tag` list via `+` and adding one scalar key of its own.
fn build_inheritance_chain(depth: usize) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    init_root(dir.path());
    fs::write(dir.path().join("main.fmf"), "tag:\n  - root\ntest: run.sh\n").unwrap();

    let mut current = dir.path().to_path_buf();
    for i in 0..depth {
        current = current.join(format!("level{i}"));
        fs::create_dir_all(&current).unwrap();
        fs::write(
            current.join("main.fmf"),
            format!("tag+:\n  - level{i}\nkey{i}: value{i}\n"),
        )
        .unwrap();
    }
    dir
}

/// A single directory whose `main.fmf` carries `width` scalar keys, to
/// isolate per-node merge cost from tree-walk cost.
fn build_wide_node(width: usize) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    init_root(dir.path());
    let mut content = String::new();
    for i in 0..width {
        content.push_str(&format!("key{i}: value{i}\n"));
    }
    fs::write(dir.path().join("main.fmf"), content).unwrap();
    dir
}

/// A `width`-wide, `depth`-deep tree (as in `benches/discovery.rs`) with
/// a handful of merge-operator keys on every node, simulating a
/// realistic test-suite metadata tree.
fn build_realistic_tree(width: usize, depth: usize) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    init_root(dir.path());

    fn populate(dir: &Path, width: usize, depth: usize, index: usize) {
        fs::write(
            dir.join("main.fmf"),
            format!(
                "tag+:\n  - node{index}\nrequire:\n  - pkg-a\n  - pkg-b\nenabled: true\n\
                 adjust:\n  - when: \"arch == x86_64\"\n    enabled: false\n"
            ),
        )
        .unwrap();
        if depth == 0 {
            return;
        }
        for i in 0..width {
            let child = dir.join(format!("child{i}"));
            fs::create_dir_all(&child).unwrap();
            populate(&child, width, depth - 1, index * 10 + i);
        }
    }

    populate(dir.path(), width, depth, 0);
    dir
}

fn bench_inheritance_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembler_inheritance_depth");

    for depth in [5, 20, 50] {
        let tree = build_inheritance_chain(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), tree.path(), |b, root| {
            b.iter(|| assembler::assemble(black_box(root)).unwrap())
        });
    }

    group.finish();
}

fn bench_node_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembler_node_width");

    for width in [10, 50, 200] {
        let tree = build_wide_node(width);
        group.bench_with_input(BenchmarkId::new("keys", width), tree.path(), |b, root| {
            b.iter(|| assembler::assemble(black_box(root)).unwrap())
        });
    }

    group.finish();
}

fn bench_realistic_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembler_realistic_tree");

    for (width, depth) in [(2, 2), (3, 3), (4, 3)] {
        let tree = build_realistic_tree(width, depth);
        let label = format!("w{width}_d{depth}");
        group.bench_with_input(BenchmarkId::new("tree", label), tree.path(), |b, root| {
            b.iter(|| assembler::assemble(black_box(root)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_inheritance_depth,
    bench_node_width,
    bench_realistic_tree,
);
criterion_main!(benches);
