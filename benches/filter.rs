//! Benchmarks for `climb`/`prune` traversal and the filter-expression
//! grammar, the query-side counterpart to `benches/assembler.rs`: once a
//! tree is built once, it's queried many times, so filter evaluation
//! cost matters independently of assembly cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fmf::node::Tree;
use fmf::query::{self, PruneOptions};
use fmf::value::Value;
use regex::Regex;
use std::path::PathBuf;

/// A flat tree of `count` leaf children under the root, each carrying a
/// `tag` list and a `require` list, the way a real test suite's nodes do.
fn build_flat_tree(count: usize) -> Tree {
    let tree = Tree::new(PathBuf::from("/bench/root"));
    for i in 0..count {
        let child = tree.root.child_or_create(&format!("case{i}"));
        let tags = Value::Sequence(vec![
            Value::String(format!("Tier{}", i % 3 + 1)),
            Value::String("smoke".to_string()),
        ]);
        let requires = Value::Sequence(vec![
            Value::String("pkg-a".to_string()),
            Value::String(format!("pkg-{i}")),
        ]);
        child.data_mut().insert(Value::String("tag".into()), tags);
        child.data_mut().insert(Value::String("require".into()), requires);
        child
            .data_mut()
            .insert(Value::String("enabled".into()), Value::Bool(i % 2 == 0));
    }
    tree
}

fn bench_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_climb");

    for count in [50, 500, 2000] {
        let tree = build_flat_tree(count);
        group.bench_with_input(BenchmarkId::new("sorted", count), &tree, |b, tree| {
            b.iter(|| query::climb(black_box(&tree.root), true, true))
        });
        group.bench_with_input(BenchmarkId::new("insertion_order", count), &tree, |b, tree| {
            b.iter(|| query::climb(black_box(&tree.root), true, false))
        });
    }

    group.finish();
}

fn bench_prune_name_regex(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_prune_name_regex");

    for count in [50, 500, 2000] {
        let tree = build_flat_tree(count);
        let mut options = PruneOptions::new();
        options.whole = true;
        options.name = Some(Regex::new("case1.*").unwrap());

        group.bench_with_input(BenchmarkId::new("nodes", count), &(tree, options), |b, (tree, options)| {
            b.iter(|| query::prune(black_box(&tree.root), options).unwrap())
        });
    }

    group.finish();
}

fn bench_prune_filter_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_prune_filter_expr");

    for count in [50, 500, 2000] {
        let tree = build_flat_tree(count);

        let mut simple = PruneOptions::new();
        simple.whole = true;
        simple.filters = vec!["tag: Tier1".to_string()];

        let mut compound = PruneOptions::new();
        compound.whole = true;
        compound.filters = vec!["tag: Tier1 & require: pkg-a".to_string()];

        group.bench_with_input(
            BenchmarkId::new("single_atom", count),
            &(tree.clone(), simple),
            |b, (tree, options)| b.iter(|| query::prune(black_box(&tree.root), options).unwrap()),
        );

        let tree2 = build_flat_tree(count);
        group.bench_with_input(
            BenchmarkId::new("and_atom", count),
            &(tree2, compound),
            |b, (tree, options)| b.iter(|| query::prune(black_box(&tree.root), options).unwrap()),
        );
    }

    group.finish();
}

fn bench_filter_expr_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_expr_parse");

    group.bench_function("single_atom", |b| {
        b.iter(|| query::FilterExpr::parse(black_box("tag: Tier(1\\|2)")).unwrap())
    });

    group.bench_function("compound", |b| {
        b.iter(|| {
            query::FilterExpr::parse(black_box(
                "tag: Tier1 & require: pkg-a | tag: smoke & enabled: true",
            ))
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_climb,
    bench_prune_name_regex,
    bench_prune_filter_expr,
    bench_filter_expr_parse,
);
criterion_main!(benches);
