//! Resolution benchmarks.
//!
//! Measures following long alias chains and reading ESTree programs.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;
use tyres::{
    AnnotationNode, Dialect, TypeDeclarationMap, resolve_type_annotation, unwrap_alias_value,
};

/// `T0 = T1`, `T1 = T2`, ... ending in a string annotation. With `nullable`
/// every right-hand side is wrapped in `?`.
fn alias_chain(len: usize, nullable: bool) -> TypeDeclarationMap {
    (0..len)
        .map(|i| {
            let name = format!("T{i}");
            let right = if i + 1 == len {
                AnnotationNode::opaque("StringTypeAnnotation")
            } else if nullable {
                AnnotationNode::nullable(AnnotationNode::reference(format!("T{}", i + 1)))
            } else {
                AnnotationNode::reference(format!("T{}", i + 1))
            };
            let decl = AnnotationNode::declaration("TypeAlias", name.clone(), right);
            (name, decl)
        })
        .collect()
}

fn flow_program(len: usize) -> serde_json::Value {
    let body: Vec<_> = (0..len)
        .map(|i| {
            json!({
                "type": "TypeAlias",
                "id": { "type": "Identifier", "name": format!("T{i}") },
                "right": {
                    "type": "GenericTypeAnnotation",
                    "id": { "type": "Identifier", "name": format!("T{}", i + 1) },
                    "typeParameters": null,
                },
            })
        })
        .collect();
    json!({ "type": "Program", "body": body })
}

fn bench_resolve_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");
    for len in [1usize, 16, 256] {
        let types = alias_chain(len, true);
        let start = AnnotationNode::reference("T0");
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                let resolved =
                    resolve_type_annotation(Some(black_box(&start)), &types, &Dialect::Flow);
                black_box(resolved)
            })
        });
    }
    group.finish();
}

fn bench_unwrap_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("unwrap_chain");
    for len in [1usize, 16, 256] {
        let types = alias_chain(len, false);
        let start = AnnotationNode::reference("T0");
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(unwrap_alias_value(black_box(&start), &types)))
        });
    }
    group.finish();
}

fn bench_read_program(c: &mut Criterion) {
    let program = flow_program(500);
    c.bench_function("read_program_500", |b| {
        b.iter(|| {
            let types = TypeDeclarationMap::from_program(black_box(&program), Dialect::Flow);
            black_box(types)
        })
    });
}

criterion_group!(
    resolve_benches,
    bench_resolve_chain,
    bench_unwrap_chain,
    bench_read_program
);
criterion_main!(resolve_benches);
