// Geographic point value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PointError {
    #[error("coordinates must be written as \"latitude, longitude\"")]
    MissingSeparator,
    #[error("expected 2 coordinate parts, got {0}")]
    WrongArity(usize),
    #[error("'{0}' is not a finite number")]
    NotANumber(String),
    #[error("coordinates out of range: lat {lat}, lng {lng}")]
    OutOfRange { lat: f64, lng: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parses the admin form format `"lat, lng"`. Only finiteness is checked.
    pub fn parse(input: &str) -> Result<Self, PointError> {
        if !input.contains(',') {
            return Err(PointError::MissingSeparator);
        }
        let parts = input.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(PointError::WrongArity(parts.len()));
        }
        let lat = parse_finite(parts[0])?;
        let lng = parse_finite(parts[1])?;
        Ok(Self { lat, lng })
    }

    /// Rejects non-finite values and anything outside WGS84 bounds.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, PointError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(PointError::OutOfRange { lat, lng });
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(PointError::OutOfRange { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// GeoJSON axis order.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn from_lng_lat(coordinates: [f64; 2]) -> Self {
        Self {
            lat: coordinates[1],
            lng: coordinates[0],
        }
    }

    pub fn to_lat_lng(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    pub fn from_lat_lng(latlng: [f64; 2]) -> Self {
        Self {
            lat: latlng[0],
            lng: latlng[1],
        }
    }

    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

fn parse_finite(part: &str) -> Result<f64, PointError> {
    part.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PointError::NotANumber(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_lat_lng_with_spaces() {
        let point = GeoPoint::parse("-6.59, 106.8").expect("point");
        assert_eq!(point.lat, -6.59);
        assert_eq!(point.lng, 106.8);
        assert_eq!(point.to_lng_lat(), [106.8, -6.59]);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(GeoPoint::parse("-6.59 106.8"), Err(PointError::MissingSeparator));
        assert_eq!(GeoPoint::parse("1,2,3"), Err(PointError::WrongArity(3)));
        assert_eq!(
            GeoPoint::parse("abc, 106.8"),
            Err(PointError::NotANumber("abc".to_string()))
        );
        assert_eq!(GeoPoint::parse("-6.59, "), Err(PointError::NotANumber(String::new())));
        assert!(GeoPoint::parse("NaN, 1").is_err());
        assert!(GeoPoint::parse("inf, 1").is_err());
    }

    #[test]
    fn checked_enforces_bounds() {
        assert!(GeoPoint::checked(-6.9, 107.6).is_ok());
        assert!(GeoPoint::checked(91.0, 0.0).is_err());
        assert!(GeoPoint::checked(0.0, -181.0).is_err());
        assert!(GeoPoint::checked(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn axis_order_round_trips() {
        let point = GeoPoint::from_lng_lat([107.6, -6.9]);
        assert_eq!(point, GeoPoint::new(-6.9, 107.6));
        assert_eq!(GeoPoint::from_lat_lng(point.to_lat_lng()), point);
        assert_eq!(point.label(), "-6.9000, 107.6000");
    }
}
