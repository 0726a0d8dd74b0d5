use criterion::{black_box, criterion_group, criterion_main, Criterion};
use codelog::clock::FixedClock;
use codelog::script::expand::expand;
use codelog::script::Interpreter;
use codelog::var::VarStore;

fn make_store(n: usize) -> VarStore {
    let mut vars = VarStore::new();
    for i in 0..n {
        vars.set(format!("v{i}"), &format!("\"value {i}\""));
    }
    vars
}

fn make_template(n: usize) -> String {
    (0..n)
        .map(|i| format!("&[v{i}.val] is &{{v{i}.type}}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn make_script(lines: usize) -> String {
    let mut src = String::new();
    for i in 0..lines {
        src.push_str(&format!("set v{} {i}\n", i % 16));
        src.push_str(&format!("log line {i}: &[v{}.val] &{{v{}.type}}\n", i % 16, i % 16));
        if i % 10 == 0 {
            src.push_str(&format!("if (v{}) is ({i})\nnote\n]\n", i % 16));
        }
    }
    src
}

fn bench_expand(c: &mut Criterion) {
    let small = make_store(4);
    let large = make_store(64);
    let tmpl_small = make_template(4);
    let tmpl_large = make_template(64);

    let mut g = c.benchmark_group("expand");

    g.bench_function("vars_4", |b| {
        b.iter(|| expand(black_box(&tmpl_small), black_box(&small)))
    });
    g.bench_function("vars_64", |b| {
        b.iter(|| expand(black_box(&tmpl_large), black_box(&large)))
    });
    g.bench_function("vars_64_no_tokens", |b| {
        b.iter(|| expand(black_box("nothing to see here"), black_box(&large)))
    });

    g.finish();
}

fn bench_run(c: &mut Criterion) {
    let script = make_script(1000);
    let clock = FixedClock::new("00:00:00");

    c.bench_function("run_1000_lines", |b| {
        b.iter(|| {
            let mut interp = Interpreter::new(&clock);
            interp.run_str(black_box(&script)).unwrap();
            interp.output.len()
        })
    });
}

criterion_group!(benches, bench_expand, bench_run);
criterion_main!(benches);
