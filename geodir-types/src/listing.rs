use crate::category::CategoryId;
use geo::Point;
use serde::{Deserialize, Serialize};

/// Identifier of a location (building/site).
pub type LocationId = u64;

/// Identifier of a listing (organization).
pub type ListingId = u64;

/// A physical site that listings reference.
///
/// Coordinates are in degrees: latitude within [-90, 90], longitude within
/// [-180, 180]. The engine rejects out-of-range values at insert time, so a
/// stored `Location` can be assumed valid.
///
/// # Examples
///
/// ```
/// use geodir_types::listing::Location;
///
/// let site = Location::new(1, "10 Lenina St", 55.7558, 37.6173);
/// assert_eq!(site.point().x(), 37.6173); // x is longitude
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Location {
    /// Create a new location.
    ///
    /// # Arguments
    ///
    /// * `id` - Location identifier
    /// * `address` - Street address text
    /// * `latitude` - Latitude in degrees
    /// * `longitude` - Longitude in degrees
    pub fn new(id: LocationId, address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// The location as a `geo` point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// An organization entry in the directory.
///
/// A listing occupies exactly one [`Location`] and belongs to any number of
/// concrete categories. Both are referenced by identifier; the listing owns
/// neither, so location and category lifetimes are independent of it.
///
/// # Examples
///
/// ```
/// use geodir_types::listing::Listing;
///
/// let shop = Listing::new(1, "Milk & More", 4)
///     .with_phone("8-800-555-35-35")
///     .with_category(12);
/// assert!(shop.in_category(12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    /// Contact phone numbers, free-form strings.
    pub phones: Vec<String>,
    /// The single location this listing occupies.
    pub location_id: LocationId,
    /// Concrete categories the listing belongs to.
    pub category_ids: Vec<CategoryId>,
}

impl Listing {
    /// Create a new listing with no phones and no categories.
    ///
    /// # Arguments
    ///
    /// * `id` - Listing identifier
    /// * `name` - Organization name
    /// * `location_id` - Identifier of the occupied location
    pub fn new(id: ListingId, name: impl Into<String>, location_id: LocationId) -> Self {
        Self {
            id,
            name: name.into(),
            phones: Vec::new(),
            location_id,
            category_ids: Vec::new(),
        }
    }

    /// Add a contact phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phones.push(phone.into());
        self
    }

    /// Add a category membership. Duplicate identifiers are ignored.
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        if !self.category_ids.contains(&category_id) {
            self.category_ids.push(category_id);
        }
        self
    }

    /// Whether the listing belongs to the given category.
    pub fn in_category(&self, category_id: CategoryId) -> bool {
        self.category_ids.contains(&category_id)
    }
}
