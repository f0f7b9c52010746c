use criterion::{Criterion, criterion_group, criterion_main};
use mdsite_engine::parse_markdown;

fn generate_source(sections: usize) -> String {
    let mut text = String::new();
    for section in 0..sections {
        text.push_str(&format!(
            "## Section {section}\n\nSome paragraph text\nacross two lines.\n\n```\nlet x = {section};\n```\n\n"
        ));
    }
    text.push_str("[home]: https://example.org\n");
    text
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let content = generate_source(100);
    group.bench_function("parse_markdown", |b| {
        b.iter(|| parse_markdown(std::hint::black_box(&content), false));
    });

    let doc = parse_markdown(&content, false);
    group.bench_function("to_text", |b| {
        b.iter(|| std::hint::black_box(&doc).to_text());
    });
    group.bench_function("toc", |b| {
        b.iter(|| std::hint::black_box(&doc).toc());
    });

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
