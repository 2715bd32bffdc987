//! Listing pipeline benchmarks.
//!
//! The pipeline runs synchronously on every keystroke-level query change,
//! so a full filter/sort/page pass over a large collection has to stay
//! comfortably within an interactive frame budget.
//!
//! Run with: cargo bench

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use invdash::model::InvoiceStatus;
use invdash::query::{run_pipeline, QueryState, SelectionTracker, SortKey, SortSpec};
use invdash::source::MockSource;

fn bench_pipeline(c: &mut Criterion) {
    let now = Utc::now();
    let records = MockSource::new(42, 10_000).generate(now);

    let mut unfiltered = QueryState::new();
    unfiltered.set_page_size(50);

    let mut narrow = QueryState::new();
    narrow.set_search("acme");
    narrow.set_status_filter(Some(InvoiceStatus::Overdue));
    narrow.set_sort(SortSpec {
        key: SortKey::Amount,
        ..Default::default()
    });
    narrow.set_page_size(50);

    let selection = SelectionTracker::new();

    c.bench_function("pipeline_unfiltered_10k", |b| {
        b.iter(|| run_pipeline(black_box(&records), &unfiltered, &selection, now))
    });

    c.bench_function("pipeline_search_and_sort_10k", |b| {
        b.iter(|| run_pipeline(black_box(&records), &narrow, &selection, now))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
