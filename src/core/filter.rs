use crate::core::engine::EngineError;
use crate::core::geo::GeoPoint;
use crate::models::Donor;

/// A donor that survived the distance filter, paired with its computed
/// distance from the hospital
#[derive(Debug, Clone)]
pub struct Candidate {
    pub donor: Donor,
    pub distance_km: f64,
}

/// Filter a directory snapshot down to donors of the requested blood type
/// within `radius_km` of `origin` (inclusive boundary).
///
/// A non-positive radius yields an empty result rather than an error. A
/// donor with a non-matching blood type is dropped silently; a donor that
/// reached the pipeline without coordinates is a broken snapshot and aborts
/// the call. Output order is unspecified.
pub fn within_radius(
    origin: &GeoPoint,
    snapshot: Vec<Donor>,
    blood_type: &str,
    radius_km: f64,
) -> Result<Vec<Candidate>, EngineError> {
    if radius_km <= 0.0 {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    for donor in snapshot {
        if donor.blood_type.as_deref() != Some(blood_type) {
            continue;
        }

        let location = donor
            .location
            .ok_or(EngineError::MissingLocation { donor_id: donor.id })?;

        let distance_km = origin.distance_km(&location);
        if distance_km <= radius_km {
            candidates.push(Candidate { donor, distance_km });
        }
    }

    Ok(candidates)
}
