use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ast::{
    ArrayBinding, BinaryExpression, BinaryOperator, BindingIdentifier, Expression,
    IdentifierExpression, LiteralNumericExpression, Node, Program, Script, Statement,
    StaticMemberExpression, VariableDeclaration, VariableDeclarationKind,
    VariableDeclarationStatement, VariableDeclarator,
};

/// `let [a0, , ...r0] = o0.p + 0, ...` with `n` declarators per statement.
fn program(statements: usize, n: usize) -> Program {
    let declarator = |i: usize| VariableDeclarator {
        binding: ArrayBinding {
            elements: vec![Some(BindingIdentifier::new(format!("a{}", i)).into()), None],
            rest: Some(Box::new(BindingIdentifier::new(format!("r{}", i)).into())),
        }
        .into(),
        init: Some(
            BinaryExpression {
                left: Box::new(
                    StaticMemberExpression::new(IdentifierExpression::new(format!("o{}", i)), "p")
                        .into(),
                ),
                operator: BinaryOperator::Plus,
                right: Box::new(Expression::from(LiteralNumericExpression { value: i as f64 })),
            }
            .into(),
        ),
    };

    Program::Script(Script {
        statements: (0..statements)
            .map(|s| {
                Statement::VariableDeclaration(VariableDeclarationStatement {
                    declaration: VariableDeclaration {
                        kind: VariableDeclarationKind::Let,
                        declarators: (0..n).map(|i| declarator(s * n + i)).collect(),
                    },
                })
            })
            .collect(),
    })
}

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural");
    group.sample_size(50);

    for size in [10, 100, 1000] {
        let a = program(size, 8);
        let b = a.clone();
        group.throughput(Throughput::Elements(ast::flatten(&a).len() as u64));

        group.bench_with_input(BenchmarkId::new("hash", size), &a, |bench, p| {
            bench.iter(|| black_box(p.structural_hash()))
        });

        group.bench_with_input(BenchmarkId::new("eq", size), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a == b))
        });
    }

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
