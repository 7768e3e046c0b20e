//! Benchmarks for resume parsing, rendering and extraction.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resumekit::{Resume, RenderOptions};

/// Builds a synthetic resume with `entries` items in every list section.
fn create_test_resume(entries: usize) -> Resume {
    let list = |label: &str| -> Vec<String> {
        (0..entries)
            .map(|i| format!("{} {} with enough words to wrap across the page width now and then", label, i))
            .collect()
    };

    Resume {
        name: "Jane Doe".to_string(),
        position: "Staff Engineer".to_string(),
        summary: "Builds reliable systems and ships them. ".repeat(entries.max(1)),
        education: list("Degree"),
        work_experience: list("Role"),
        skills: (0..entries).map(|i| format!("Skill {}", i)).collect(),
        certificates: list("Certificate"),
        languages: vec!["English".to_string(), "German".to_string()],
    }
}

/// Benchmark source detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = resumekit::render_resume_pdf(&create_test_resume(1)).unwrap();
    let text_data = b"Name: Jane Doe\nSkills: Go, Rust\n";

    c.bench_function("detect_pdf", |b| {
        b.iter(|| resumekit::detect_source_format(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("detect_text", |b| {
        b.iter(|| resumekit::detect_source_format(black_box(text_data)).unwrap());
    });
}

/// Benchmark parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_resume");

    for entries in [5, 50, 500].iter() {
        let text = create_test_resume(*entries).to_key_value_text();

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| resumekit::parse_resume(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark layout and PDF writing.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_resume");
    let options = RenderOptions::default();

    for entries in [5, 50].iter() {
        let resume = create_test_resume(*entries);

        group.bench_function(format!("layout_{}_entries", entries), |b| {
            b.iter(|| resumekit::layout_resume(black_box(&resume), &options));
        });

        group.bench_function(format!("pdf_{}_entries", entries), |b| {
            b.iter(|| resumekit::render_resume_pdf(black_box(&resume)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark extraction of rendered documents.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_text");

    for entries in [5, 50].iter() {
        let pdf = resumekit::render_resume_pdf(&create_test_resume(*entries)).unwrap();

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| resumekit::extract_text(black_box(&pdf)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_parsing,
    bench_rendering,
    bench_extraction,
);
criterion_main!(benches);
