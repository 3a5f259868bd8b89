use crate::{
    api::directions::{DirectionsResponse, FetchDirections},
    error::CommuteError,
};

const SECONDS_PER_MINUTE: f64 = 60.0;
const METERS_PER_MILE: f64 = 1609.34;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceResult {
    pub duration_minutes: f64,
    pub distance_miles: f64,
}

impl DistanceResult {
    pub fn from_raw(duration_seconds: f64, distance_meters: f64) -> Self {
        Self {
            duration_minutes: duration_seconds / SECONDS_PER_MINUTE,
            distance_miles: distance_meters / METERS_PER_MILE,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes / 60.0
    }
}

// Only routes[0].legs[0] is consulted
pub fn calculate_distance(response: &DirectionsResponse) -> Result<DistanceResult, CommuteError> {
    if !response.status_ok() {
        return Err(CommuteError::ApiStatus {
            status: response.status.clone(),
            message: response.error_message.clone(),
        });
    }

    let leg = response
        .routes
        .first()
        .ok_or_else(|| CommuteError::Lookup("response contained no routes".to_string()))?
        .legs
        .first()
        .ok_or_else(|| CommuteError::Lookup("first route contained no legs".to_string()))?;

    let duration = leg
        .duration
        .as_ref()
        .ok_or_else(|| CommuteError::Lookup("first leg has no duration".to_string()))?;
    let distance = leg
        .distance
        .as_ref()
        .ok_or_else(|| CommuteError::Lookup("first leg has no distance".to_string()))?;

    Ok(DistanceResult::from_raw(duration.value, distance.value))
}

/// Fetches directions between two addresses and reduces them to a [`DistanceResult`].
pub struct DistanceFinder<F> {
    fetcher: F,
}

impl<F: FetchDirections> DistanceFinder<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn find_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceResult, CommuteError> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(CommuteError::BlankInput);
        }

        let response = self.fetcher.get_directions(origin, destination)?;
        let result = calculate_distance(&response)?;

        log::info!(
            "{} -> {}: {:.2} min, {:.2} miles",
            origin,
            destination,
            result.duration_minutes,
            result.distance_miles
        );

        Ok(result)
    }
}
