//! Performance benchmarks for the leave summary service.
//!
//! Covers the pure aggregation at several input sizes, decoding of a
//! month-sized OData payload, and a full `/summary` request against an
//! in-memory backend.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use async_trait::async_trait;
use axum::{body::Body, http::Request};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tower::ServiceExt;

use leave_summary::api::{AppState, create_router};
use leave_summary::calculation::aggregate;
use leave_summary::client::{AccessToken, HrBackend, TimeEntryQuery, parse_time_entries};
use leave_summary::error::ServiceResult;
use leave_summary::models::{CalendarDay, PlannedWorkingTimeUpdate, ReportingCategory, TimeEntry};

const CODES: [&str; 7] = ["300", "100", "110", "120", "150", "flex", "200"];
const TAGS: [&str; 5] = ["SHORT_LE_3D", "SHORT_GT_3D", "LONG_LT_8W", "LONG_GT_8W", "OTHER"];

/// Creates `count` entries cycling through every time type, each with a
/// handful of calendar days.
fn create_entries(count: usize) -> Vec<TimeEntry> {
    (0..count)
        .map(|i| {
            let days = (0..(i % 5) + 1)
                .map(|d| CalendarDay {
                    quantity: if d % 3 == 0 {
                        None
                    } else {
                        Some(Decimal::new(5 * (d as i64 + 1), 1))
                    },
                    reporting_category: Some(ReportingCategory::from_tag(TAGS[(i + d) % TAGS.len()])),
                })
                .collect();
            TimeEntry::new(CODES[i % CODES.len()], days)
        })
        .collect()
}

/// Creates an OData response body with `count` records.
fn create_odata_body(count: usize) -> String {
    let results: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "__metadata": { "uri": format!("https://example.com/employeeTime('{}')", i) },
                "externalCode": format!("et_{:04}", i),
                "userId": "emp_bench_001",
                "timeType": CODES[i % CODES.len()],
                "timeCalendar": {
                    "results": [
                        { "date": "/Date(1735689600000)/", "quantity": "1", "reportingCategory": TAGS[i % TAGS.len()] },
                        { "date": "/Date(1735776000000)/", "quantity": null }
                    ]
                }
            })
        })
        .collect();
    serde_json::json!({ "d": { "results": results } }).to_string()
}

#[derive(Clone)]
struct StaticBackend {
    entries: Vec<TimeEntry>,
}

#[async_trait]
impl HrBackend for StaticBackend {
    async fn access_token(&self) -> ServiceResult<AccessToken> {
        Ok(AccessToken::new("bench-token"))
    }

    async fn fetch_time_entries(
        &self,
        _token: &AccessToken,
        _query: &TimeEntryQuery,
    ) -> ServiceResult<Vec<TimeEntry>> {
        Ok(self.entries.clone())
    }

    async fn update_planned_working_time(
        &self,
        _token: &AccessToken,
        _update: &PlannedWorkingTimeUpdate,
    ) -> ServiceResult<()> {
        Ok(())
    }
}

/// Benchmark: aggregation at increasing entry counts.
fn bench_aggregate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in [10usize, 100, 1_000, 10_000] {
        let entries = create_entries(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("entries", count), &entries, |b, entries| {
            b.iter(|| black_box(aggregate(black_box(entries))))
        });
    }

    group.finish();
}

/// Benchmark: decoding a month of OData records into domain entries.
fn bench_decode_month(c: &mut Criterion) {
    let body = create_odata_body(60);

    c.bench_function("decode_and_aggregate_month", |b| {
        b.iter(|| {
            let entries = parse_time_entries(black_box(body.as_bytes())).unwrap();
            black_box(aggregate(&entries))
        })
    });
}

/// Benchmark: a full `/summary` request through the router.
fn bench_summary_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(StaticBackend {
        entries: create_entries(60),
    }));
    let body = serde_json::json!({
        "userId": "emp_bench_001",
        "reqStartDate": "2026-01-01",
        "reqEndDate": "2026-01-31"
    })
    .to_string();

    c.bench_function("summary_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/summary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_aggregate_scaling,
    bench_decode_month,
    bench_summary_request,
);
criterion_main!(benches);
