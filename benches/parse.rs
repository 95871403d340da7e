// benches/parse.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use coach_scout::csv::{self, Delim};
use coach_scout::records;

fn synthetic_table(rows: usize) -> String {
    let mut text = String::from(
        "id,name,imageUrl,coverImage,rating,peopleCoached,slot,followers,following,plan,reviews,specialities,certifications\n",
    );
    for i in 0..rows {
        text.push_str(&format!(
            "c{i:04},Coach {i},https://x/{i}.jpg,https://x/c{i}.jpg,4.{},{},{},{},{},Transformation,{},\"Fat Loss, Strength\",\"ACE CPT, PN L1\"\n",
            i % 10,
            i * 7 % 3000,
            i % 9,
            i * 13 % 9000,
            i % 400,
            i % 500,
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let table = synthetic_table(1000);

    c.bench_function("parse_rows_1k", |b| {
        b.iter(|| {
            let rows = csv::parse_rows(black_box(&table), Delim::Csv);
            black_box(rows.len())
        })
    });

    c.bench_function("parse_table_1k", |b| {
        b.iter(|| {
            let records = records::parse_table(black_box(&table));
            black_box(records.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
