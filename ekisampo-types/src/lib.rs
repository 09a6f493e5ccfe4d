//! # ekisampo-types
//!
//! Core data types shared by the ekisampo crates.
//!
//! - **Stations**: `Station`, `StationId`
//! - **Regions**: `Region`, the polygon-or-circle shape a user draws on the map
//!
//! All coordinates are `geo` primitives in (longitude, latitude) order.
//!
//! ## Examples
//!
//! ```rust
//! use ekisampo_types::station::{Station, StationId};
//! use geo::Point;
//!
//! let tokyo = Station::new(
//!     StationId::new("tokyo"),
//!     "Tokyo",
//!     vec!["Yamanote".to_string(), "Chuo".to_string()],
//!     "JR East",
//!     Point::new(139.7671, 35.6812),
//! );
//! assert_eq!(tokyo.lng(), 139.7671);
//! ```

pub mod region;
pub mod station;
