use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use pantry_groceries::{Category, GroceryRecord, summarize, to_domain, to_record};

fn household(size: usize) -> Vec<GroceryRecord> {
    (0..size)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            let mut record = GroceryRecord::new(format!("item-{i}"), category)
                .with_last_time_bought_days((i % 14) as i64)
                .with_average_buying_days(7);
            if i % 3 != 0 {
                record = record.with_expiration_date(format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1));
            }
            record
        })
        .collect()
}

fn bench_round_trip(c: &mut Criterion) {
    let record = GroceryRecord::new("Milk", Category::Dairy)
        .with_expiration_date("2024-05-10")
        .with_last_time_bought_days(3)
        .with_average_buying_days(7);

    c.bench_function("to_domain_then_to_record", |b| {
        b.iter(|| {
            let domain = to_domain(black_box(record.clone())).unwrap();
            black_box(to_record(&domain))
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut group = c.benchmark_group("summarize");

    for size in [10usize, 100, 1_000] {
        let records = household(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(summarize(records.iter().cloned(), today, 3)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_round_trip, bench_summarize);
criterion_main!(benches);
