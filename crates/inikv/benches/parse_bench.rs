use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use inikv::{ParseOptions, parse, parse_with};

fn make_document(sections: usize, items: usize) -> String {
    let mut s = String::new();
    s.push_str("; generated\n");
    for i in 0..sections {
        s.push_str(&format!("[section_{}]\n", i));
        for j in 0..items {
            s.push_str(&format!("key_{} = value {} of {}\n", j, j, i));
        }
        s.push('\n');
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (sections, items) in [(4, 8), (32, 32), (128, 64)] {
        let doc = make_document(sections, items);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        let id = format!("{}x{}", sections, items);
        group.bench_with_input(BenchmarkId::new("lenient", &id), &doc, |b, s| {
            b.iter(|| parse(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("strict", &id), &doc, |b, s| {
            b.iter(|| parse_with(black_box(s), &ParseOptions::strict()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
