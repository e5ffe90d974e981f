use criterion::{Criterion, criterion_group, criterion_main};
use numbered_lines::{NumberedLines, Slice};
use regex::Regex;

fn generate_pages(pages: usize) -> Vec<String> {
    let base = "Heading\n\nSome extracted paragraph text.\n   \nTODO: check citation\r\nclosing line\n";
    (0..pages).map(|_| base.repeat(20)).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(10);

    let pages = generate_pages(100);
    group.bench_function("from_pages", |b| {
        b.iter(|| NumberedLines::from_pages(std::hint::black_box(&pages)));
    });

    group.finish();
}

fn bench_transformations(c: &mut Criterion) {
    let mut group = c.benchmark_group("transformations");
    group.sample_size(10);

    let lines = NumberedLines::from_pages(generate_pages(100));
    let blank = Regex::new(r"^\s*$").unwrap();

    group.bench_function("filter_out_blank", |b| {
        b.iter(|| std::hint::black_box(&lines).filter_out(&blank));
    });
    group.bench_function("slice_by_reverse_step", |b| {
        b.iter(|| std::hint::black_box(&lines).slice_by(Slice::FULL.step(-3)));
    });
    group.bench_function("format", |b| {
        b.iter(|| std::hint::black_box(&lines).format(None));
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_transformations);
criterion_main!(benches);
