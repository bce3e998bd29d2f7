//! Criterion benchmarks for rule evaluation over a realistic site export.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rule_engine::{evaluate, REQUIRED_COLUMNS};
use site_table::{CellValue, Table};

const STATUSES: [&str; 4] = ["Selected", "SIV Ready", "Active", "Closed"];

/// Build a table of `rows` sites with a mix of dates, statuses, and blanks.
fn make_table(rows: usize) -> Table {
    let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|name| name.to_string()).collect();
    let base = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let date = |offset: usize| {
        let day = base + chrono::Duration::days((offset % 900) as i64);
        CellValue::Text(day.format("%Y-%m-%d").to_string())
    };

    let rows = (0..rows)
        .map(|i| {
            vec![
                CellValue::Integer(1000 + i as i64),
                CellValue::Text(format!("Overdue {} days", i % 60)),
                date(i * 7),
                date(i * 11),
                date(i * 3),
                date(i * 5),
                if i % 9 == 0 { CellValue::Empty } else { date(i * 13) },
                CellValue::Text("TBD".to_string()),
                CellValue::Text(STATUSES[i % STATUSES.len()].to_string()),
                date(i * 17),
            ]
        })
        .collect();

    Table::new(headers, rows)
}

fn bench_evaluate(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    for rows in [500, 5_000] {
        let table = make_table(rows);
        c.bench_function(&format!("evaluate_{}_rows", rows), |b| {
            b.iter(|| evaluate(black_box(&table), reference).unwrap())
        });
    }
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
