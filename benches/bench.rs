// Criterion benchmarks for donor-match

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use donor_match::core::{Matcher, ScoringContext};
use donor_match::models::Donor;
use donor_match::GeoPoint;

fn create_donor(id: i32, lat: f64, lng: f64) -> Donor {
    Donor {
        id,
        name: format!("Donor {}", id),
        phone: format!("090000{:04}", id),
        email: format!("donor{}@example.com", id),
        role: "donor".to_string(),
        address: None,
        blood_type: Some("O+".to_string()),
        location: Some(GeoPoint::new(lat, lng).unwrap()),
        last_donation: if id % 3 == 0 {
            NaiveDate::from_ymd_opt(2024, 3, 15)
        } else {
            None
        },
    }
}

fn create_context() -> ScoringContext {
    ScoringContext {
        blood_type: "O+".to_string(),
        radius_km: 25.0,
        as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    let hanoi = GeoPoint::new(21.0278, 105.8342).unwrap();
    let nearby = GeoPoint::new(21.05, 105.86).unwrap();

    c.bench_function("haversine_distance", |b| {
        b.iter(|| black_box(hanoi).distance_km(black_box(&nearby)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_policy();
    let hospital = GeoPoint::new(21.0278, 105.8342).unwrap();
    let ctx = create_context();

    let mut group = c.benchmark_group("ranking");

    for snapshot_size in [10, 50, 100, 500, 1000].iter() {
        let snapshot: Vec<Donor> = (0..*snapshot_size)
            .map(|i| {
                let lat_offset = (f64::from(i) * 0.0007) % 0.2;
                let lng_offset = (f64::from(i) * 0.0011) % 0.2;
                create_donor(i, 21.0278 + lat_offset, 105.8342 + lng_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(snapshot_size),
            snapshot_size,
            |b, _| {
                b.iter(|| {
                    matcher
                        .rank(black_box(&hospital), black_box(snapshot.clone()), &ctx)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_ranking);
criterion_main!(benches);
