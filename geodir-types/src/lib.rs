//! # geodir-types
//!
//! Core directory data types for the Geodir search engine.
//!
//! This crate provides the plain data records the engine operates on:
//!
//! - **Taxonomy types**: `Category`, a node in the three-level category tree
//! - **Directory types**: `Listing` (an organization) and `Location` (a site)
//! - **Geometry types**: `GeoBounds`, a degree-space bounding rectangle
//!
//! All types are serializable with Serde and interoperate with the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geodir_types::listing::{Listing, Location};
//!
//! let site = Location::new(1, "10 Lenina St", 55.7558, 37.6173);
//! let shop = Listing::new(1, "Horns and Hooves", 1).with_phone("2-12-85-06");
//! assert_eq!(shop.location_id, site.id);
//! ```

pub mod bounds;
pub mod category;
pub mod listing;
