use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use selene::daily::{moon_phase, planet_positions};
use selene::reading::{parse_daily_reading, ReadingRules};
use selene::{calculate_horoscope, BirthRecord};

fn bench_calculate_horoscope(c: &mut Criterion) {
    let record = BirthRecord::new(NaiveDate::from_ymd_opt(1990, 7, 15).unwrap())
        .with_time("14:30")
        .with_city("Istanbul")
        .with_country("Türkiye");

    c.bench_function("calculate_horoscope", |b| {
        b.iter(|| calculate_horoscope(black_box(&record)))
    });
}

fn bench_daily_sky(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

    c.bench_function("planet_positions", |b| {
        b.iter(|| planet_positions(black_box(&today)))
    });
    c.bench_function("moon_phase", |b| b.iter(|| moon_phase(black_box(&today))));
}

fn bench_parse_daily_reading(c: &mut Criterion) {
    let text = format!(
        "Genel Bakış: {}\nAşk: Kalbin açık.\nKariyer: Yeni bir kapı.\nSağlık: Dinlen.",
        "Bugün yıldızlar seninle. ".repeat(8)
    );
    let rules = ReadingRules::default();

    c.bench_function("parse_daily_reading", |b| {
        b.iter(|| parse_daily_reading(black_box(&text), &rules))
    });
}

criterion_group!(
    benches,
    bench_calculate_horoscope,
    bench_daily_sky,
    bench_parse_daily_reading
);
criterion_main!(benches);
