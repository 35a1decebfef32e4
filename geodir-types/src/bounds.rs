use geo::Rect;
use serde::{Deserialize, Serialize};

/// A degree-space bounding rectangle over latitude and longitude.
///
/// Containment is inclusive on all four edges. The rectangle does not wrap
/// the antimeridian; callers that need a wrapping query issue two bounds.
///
/// # Examples
///
/// ```
/// use geodir_types::bounds::GeoBounds;
///
/// let bounds = GeoBounds::new(55.0, 56.0, 37.0, 38.0);
/// assert!(bounds.contains(55.7558, 37.6173));
/// assert!(!bounds.contains(54.9, 37.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Minimum latitude in degrees.
    pub min_lat: f64,
    /// Maximum latitude in degrees.
    pub max_lat: f64,
    /// Minimum longitude in degrees.
    pub min_lng: f64,
    /// Maximum longitude in degrees.
    pub max_lng: f64,
}

impl GeoBounds {
    /// Create a new bounding rectangle.
    ///
    /// # Arguments
    ///
    /// * `min_lat` - Minimum latitude in degrees
    /// * `max_lat` - Maximum latitude in degrees
    /// * `min_lng` - Minimum longitude in degrees
    /// * `max_lng` - Maximum longitude in degrees
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Create bounds from a `geo::Rect` (x = longitude, y = latitude).
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lng: rect.min().x,
            max_lng: rect.max().x,
        }
    }

    /// Convert to a `geo::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.min_lng, y: self.min_lat },
            geo::coord! { x: self.max_lng, y: self.max_lat },
        )
    }

    /// Check whether a point lies within the bounds, edges included.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lng
            && longitude <= self.max_lng
    }

    /// Check whether this rectangle overlaps another.
    pub fn intersects(&self, other: &GeoBounds) -> bool {
        !(self.max_lat < other.min_lat
            || self.min_lat > other.max_lat
            || self.max_lng < other.min_lng
            || self.min_lng > other.max_lng)
    }

    /// The center point of the bounds as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}
