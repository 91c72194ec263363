//! Assembly throughput benchmarks
//!
//! Measures block assembly and rendering with varying:
//! - Entries per section (1, 10, 100)
//! - Batch sizes (1, 10, 100, 1000 records)
//!
//! Run benchmarks: `cargo bench --bench assembly_throughput`
//!
//! Compare specific groups:
//! ```
//! cargo bench --bench assembly_throughput -- "section_size"
//! cargo bench --bench assembly_throughput -- "batch"
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;
use vitae::{OutputFormat, PipelineBuilder, ResumeRecord};

/// A resume with `entries` items in every list section.
fn resume(entries: usize) -> Value {
    let work: Vec<Value> = (0..entries)
        .map(|i| {
            json!({
                "company": format!("Company {}", i),
                "position": "Engineer",
                "location": {"city": "Bergen", "region": "Vestland"},
                "startDate": "2019",
                "endDate": "2021",
                "highlights": ["Shipped the thing", "Fixed the other thing"]
            })
        })
        .collect();
    let education: Vec<Value> = (0..entries)
        .map(|i| {
            json!({
                "institution": format!("University {}", i),
                "studyType": "BSc",
                "area": "Informatics",
                "startDate": "2014",
                "score": 3.8,
                "courses": ["Compilers", "Databases"]
            })
        })
        .collect();
    let skills: Vec<Value> = (0..entries)
        .map(|i| json!({"name": format!("Skill {}", i), "keywords": ["a", "b", "c"]}))
        .collect();

    json!({
        "basics": {
            "name": "Ada Lin",
            "email": "ada@example.com",
            "profiles": [{"network": "GitHub", "username": "adalin", "url": "https://github.com/adalin"}]
        },
        "work": work,
        "education": education,
        "skills": skills
    })
}

fn benchmark_section_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_size");
    let pipeline = PipelineBuilder::new()
        .build()
        .expect("Failed to build pipeline");

    for entries in [1, 10, 100] {
        let record = ResumeRecord::from_value(resume(entries)).expect("valid record");
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(BenchmarkId::new("assemble", entries), &record, |b, record| {
            b.iter(|| black_box(pipeline.assemble(record)))
        });
    }
    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let pipeline = PipelineBuilder::new()
        .build()
        .expect("Failed to build pipeline");

    for count in [1, 10, 100, 1000] {
        let records: Vec<ResumeRecord> = (0..count)
            .map(|_| ResumeRecord::from_value(resume(5)).expect("valid record"))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            b.iter(|| black_box(pipeline.assemble_batch(records)))
        });
    }
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let record = ResumeRecord::from_value(resume(10)).expect("valid record");

    for format in [OutputFormat::Json, OutputFormat::Text] {
        let pipeline = PipelineBuilder::new()
            .with_output_format(format)
            .build()
            .expect("Failed to build pipeline");
        let blocks = pipeline.assemble(&record);
        group.bench_function(BenchmarkId::new("backend", format), |b| {
            b.iter(|| {
                let out = pipeline
                    .render(&blocks, Vec::with_capacity(16 * 1024))
                    .expect("render");
                black_box(out)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_section_size, benchmark_batch, benchmark_render);
criterion_main!(benches);
