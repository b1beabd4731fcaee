// Unit tests for donor-match

use chrono::NaiveDate;
use donor_match::core::filter::within_radius;
use donor_match::core::geo::{GeoError, GeoPoint};
use donor_match::core::scoring::{RecencyDistanceScorer, Scorer, ScoringContext};
use donor_match::models::{Donor, ScoringWeights};

fn create_donor(id: i32, blood_type: &str, lat: f64, lng: f64) -> Donor {
    Donor {
        id,
        name: format!("Donor {}", id),
        phone: format!("090000{:04}", id),
        email: format!("donor{}@example.com", id),
        role: "donor".to_string(),
        address: None,
        blood_type: Some(blood_type.to_string()),
        location: Some(GeoPoint::new(lat, lng).unwrap()),
        last_donation: None,
    }
}

fn create_context(radius_km: f64) -> ScoringContext {
    ScoringContext {
        blood_type: "O+".to_string(),
        radius_km,
        as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    let p = GeoPoint::new(40.7128, -74.0060).unwrap();
    assert!(p.distance_km(&p) < 0.01);
}

#[test]
fn test_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = GeoPoint::new(40.7580, -73.9855).unwrap();
    let brooklyn = GeoPoint::new(40.6782, -73.9442).unwrap();

    let distance = manhattan.distance_km(&brooklyn);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_distance_symmetry_across_hemispheres() {
    let a = GeoPoint::new(-33.8688, 151.2093).unwrap(); // Sydney
    let b = GeoPoint::new(51.5074, -0.1278).unwrap(); // London

    assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
}

#[test]
fn test_geopoint_rejects_bad_coordinates() {
    assert!(matches!(
        GeoPoint::new(95.0, 0.0),
        Err(GeoError::LatitudeOutOfRange(_))
    ));
    assert!(matches!(
        GeoPoint::new(0.0, -200.0),
        Err(GeoError::LongitudeOutOfRange(_))
    ));
}

#[test]
fn test_filter_inclusive_at_exact_radius() {
    let origin = GeoPoint::new(0.0, 0.0).unwrap();
    let donor = create_donor(1, "O+", 0.09, 0.0);
    let exact_distance = origin.distance_km(&donor.location.unwrap());

    let candidates = within_radius(&origin, vec![donor], "O+", exact_distance).unwrap();

    assert_eq!(candidates.len(), 1, "boundary distance must be included");
}

#[test]
fn test_filter_zero_radius_is_empty_not_error() {
    let origin = GeoPoint::new(0.0, 0.0).unwrap();
    let snapshot = vec![create_donor(1, "O+", 0.0, 0.0)];

    let candidates = within_radius(&origin, snapshot, "O+", 0.0).unwrap();

    assert!(candidates.is_empty());
}

#[test]
fn test_filter_reports_computed_distances() {
    let origin = GeoPoint::new(21.0278, 105.8342).unwrap();
    let snapshot = vec![
        create_donor(1, "O+", 21.03, 105.84),
        create_donor(2, "O+", 21.06, 105.87),
    ];

    let candidates = within_radius(&origin, snapshot, "O+", 25.0).unwrap();

    for candidate in &candidates {
        let recomputed = origin.distance_km(&candidate.donor.location.unwrap());
        assert!((candidate.distance_km - recomputed).abs() < 1e-9);
    }
}

#[test]
fn test_scorer_prefers_rested_donor_at_equal_distance() {
    let scorer = RecencyDistanceScorer::default();
    let ctx = create_context(10.0);

    let mut recent = create_donor(1, "O+", 21.03, 105.84);
    recent.last_donation = NaiveDate::from_ymd_opt(2024, 5, 15);
    let rested = create_donor(2, "O+", 21.03, 105.84);

    let recent_score = scorer.score(&recent, 2.0, &ctx);
    let rested_score = scorer.score(&rested, 2.0, &ctx);

    assert!(recent_score < rested_score);
}

#[test]
fn test_scorer_is_deterministic() {
    let scorer = RecencyDistanceScorer::new(ScoringWeights::default(), 90);
    let ctx = create_context(10.0);
    let mut donor = create_donor(1, "O+", 21.03, 105.84);
    donor.last_donation = NaiveDate::from_ymd_opt(2024, 4, 1);

    let first = scorer.score(&donor, 4.2, &ctx);
    let second = scorer.score(&donor, 4.2, &ctx);

    assert_eq!(first, second);
}

#[test]
fn test_custom_weights_shift_the_balance() {
    let ctx = create_context(10.0);
    let mut recent = create_donor(1, "O+", 21.03, 105.84);
    recent.last_donation = NaiveDate::from_ymd_opt(2024, 5, 25);

    let distance_only = RecencyDistanceScorer::new(
        ScoringWeights {
            distance: 1.0,
            recency: 0.0,
        },
        90,
    );
    let recency_only = RecencyDistanceScorer::new(
        ScoringWeights {
            distance: 0.0,
            recency: 1.0,
        },
        90,
    );

    let rested = create_donor(2, "O+", 21.03, 105.84);

    // With no recency weight, equal distance means equal score
    assert_eq!(
        distance_only.score(&recent, 2.0, &ctx),
        distance_only.score(&rested, 2.0, &ctx)
    );

    // With full recency weight the rested donor wins outright
    assert!(recency_only.score(&recent, 2.0, &ctx) < recency_only.score(&rested, 2.0, &ctx));
}
