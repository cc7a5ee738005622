use std::future::Future;

use tracing::{debug, instrument};

use crate::bearing::KAABA;
use crate::error::LocationError;
use crate::types::{Coordinate, Place};

/// One-shot position query offered by the host environment.
pub trait LocationProvider {
    fn current_position(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;
}

/// Always answers with the same result.
#[derive(Debug, Clone)]
pub struct StaticLocation(pub Result<Coordinate, LocationError>);

impl LocationProvider for StaticLocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.0.clone()
    }
}

/// Place shown when the position query fails or is denied.
pub fn fallback_place() -> Place {
    Place {
        city: "مكة المكرمة".to_string(),
        country: "السعودية".to_string(),
        coordinate: KAABA,
    }
}

/// How the observer position was decided at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Located(Place),
    Fallback { place: Place, reason: LocationError },
}

impl Resolution {
    pub fn place(&self) -> &Place {
        match self {
            Resolution::Located(place) => place,
            Resolution::Fallback { place, .. } => place,
        }
    }

    pub fn into_place(self) -> Place {
        match self {
            Resolution::Located(place) => place,
            Resolution::Fallback { place, .. } => place,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }
}

/// Queries `provider` exactly once. A successful fix is labelled with
/// `located_city`/`located_country` (no reverse geocoding); any failure
/// substitutes `fallback` and is never retried.
#[instrument(skip_all)]
pub async fn resolve_location<P: LocationProvider>(
    provider: &P,
    located_city: &str,
    located_country: &str,
    fallback: Place,
) -> Resolution {
    match provider.current_position().await {
        Ok(coordinate) => {
            debug!(
                latitude = coordinate.latitude,
                longitude = coordinate.longitude,
                "position obtained"
            );
            Resolution::Located(Place {
                city: located_city.to_string(),
                country: located_country.to_string(),
                coordinate,
            })
        }
        Err(reason) => {
            debug!(%reason, "position unavailable, using fallback {}", fallback.city);
            Resolution::Fallback {
                place: fallback,
                reason,
            }
        }
    }
}
