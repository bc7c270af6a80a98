use thiserror::Error;

/// A geographical position given in latitude/longitude degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid geographic position")]
pub struct InvalidMapPoint;

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Fails for non-finite or out-of-range coordinates.
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, InvalidMapPoint> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(InvalidMapPoint)
        }
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }
}

/// Unweighted mean position of the given points.
///
/// Returns `None` for an empty input instead of dividing by zero.
pub fn centroid(points: &[MapPoint]) -> Option<MapPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(MapPoint::from_lat_lng_deg(lat_sum / n, lng_sum / n))
}
