//! Performance benchmarks for the payroll deduction engine.
//!
//! Covers the individual statutory calculators, the combined breakdown across
//! the salary range, and a full `POST /api/calculate-payroll` round trip
//! through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{
    calculate_monthly_withholding_tax, calculate_pagibig, calculate_philhealth, calculate_sss,
    compute_breakdown,
};
use payroll_engine::models::{EmploymentType, NewEmployee};
use payroll_engine::store::{EmployeeRepository, InMemoryStore};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Creates a state holding one regular employee earning ₱45,000.
fn create_test_state() -> AppState {
    let store = InMemoryStore::new();
    store
        .create_employee(NewEmployee {
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            email: "maria.santos@example.com".to_string(),
            position: "Engineer".to_string(),
            department: "Engineering".to_string(),
            employment_type: EmploymentType::Regular,
            monthly_salary: dec("45000"),
            date_hired: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        })
        .unwrap();
    AppState::new(store)
}

fn bench_calculators(c: &mut Criterion) {
    let salary = dec("45000.00");
    let mut group = c.benchmark_group("calculators");

    group.bench_function("sss", |b| b.iter(|| calculate_sss(black_box(salary))));
    group.bench_function("philhealth", |b| {
        b.iter(|| calculate_philhealth(black_box(salary)))
    });
    group.bench_function("pagibig", |b| b.iter(|| calculate_pagibig(black_box(salary))));
    group.bench_function("withholding_tax", |b| {
        b.iter(|| calculate_monthly_withholding_tax(black_box(salary)))
    });

    group.finish();
}

/// Benchmark: breakdown across the brackets, from the SSS floor to the top tax bracket.
fn bench_breakdown_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("breakdown");

    for salary in ["3000", "20833.33", "45000", "150000", "750000"] {
        let basis = dec(salary);
        group.bench_with_input(BenchmarkId::from_parameter(salary), &basis, |b, basis| {
            b.iter(|| compute_breakdown(black_box(*basis)))
        });
    }

    group.finish();
}

/// Benchmark: a batch of 1000 breakdowns, one payroll run's worth.
fn bench_batch_1000(c: &mut Criterion) {
    let salaries: Vec<Decimal> = (0..1000)
        .map(|i| Decimal::new(10_000_00 + i * 97_13, 2))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(salaries.len() as u64));
    group.bench_function("breakdown_1000", |b| {
        b.iter(|| {
            for salary in &salaries {
                black_box(compute_breakdown(*salary));
            }
        })
    });
    group.finish();
}

/// Benchmark: calculate-payroll through the HTTP router, hitting the update path.
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = r#"{"employee_id": 1, "period_month": 6, "period_year": 2025}"#;

    c.bench_function("http_calculate_payroll", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/calculate-payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
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
    bench_calculators,
    bench_breakdown_scaling,
    bench_batch_1000,
    bench_http_calculate,
);
criterion_main!(benches);
