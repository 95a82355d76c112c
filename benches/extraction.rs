use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use mediaindex::{
    ExtractionScope, ExtractorRegistry, FnOpener, MediaBlob, MediaDescriptor, NormalizeConfig,
    RawMetadata, StaticDocument,
};

fn sample_pages(count: usize) -> Vec<String> {
    let line = "Quarterly résumé, «draft» — 日本語のテキスト: 42 items;\tsee appendix.\n";
    (0..count).map(|_| line.repeat(60)).collect()
}

fn registry_for(pages: Vec<String>, cutoff: usize) -> ExtractorRegistry {
    let metadata: RawMetadata = [
        ("Title", "  Bench document  "),
        ("Keywords", "bench, pdf"),
        ("Subject", ""),
    ]
    .into_iter()
    .collect();
    let doc = StaticDocument::new(pages).with_metadata(metadata);
    ExtractorRegistry::pdf(
        FnOpener::new(move |_stream| Ok(doc.clone())),
        NormalizeConfig::with_cutoff(cutoff),
    )
}

fn extraction_bench(c: &mut Criterion) {
    let item = MediaBlob::new("/media/bench", MediaDescriptor::new("pdf", ""), Vec::new());
    let mut group = c.benchmark_group("extract");

    for pages in [1usize, 10, 100] {
        let sample = sample_pages(pages);
        let bytes: usize = sample.iter().map(String::len).sum();
        let registry = registry_for(sample, usize::MAX);
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_function(format!("pages_{pages}"), |b| {
            b.iter(|| {
                let result =
                    registry.extract(black_box(&item), ExtractionScope::ContentAndMetadata);
                black_box(result)
            });
        });
    }

    group.finish();
}

fn cutoff_bench(c: &mut Criterion) {
    let item = MediaBlob::new("/media/bench", MediaDescriptor::new("pdf", ""), Vec::new());
    let registry = registry_for(
        sample_pages(500),
        NormalizeConfig::default().text_cutoff_length,
    );

    c.bench_function("extract_500_pages_default_cutoff", |b| {
        b.iter(|| {
            let result = registry
                .extract(black_box(&item), ExtractionScope::ContentAndMetadata)
                .expect("bench extraction");
            assert!(result.truncated);
            black_box(result)
        });
    });
}

criterion_group!(benches, extraction_bench, cutoff_bench);
criterion_main!(benches);
