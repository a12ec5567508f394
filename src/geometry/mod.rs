//! Geometry model shared by the drawing, drag and store modules.
//!
//! - [`kind`] - [`EntityKind`] discriminant (Point/Line/Polygon)
//! - [`codec`] - canonical `"lng lat, lng lat"` text encoding
//! - [`validation`] - per-kind acceptance rules used before create/update
//!
//! The map widget works in latitude-first order while the canonical text is
//! longitude-first. Positions are carried as [`LatLng`] with named fields, so the
//! order only matters inside the codec.

mod codec;
mod kind;
mod validation;

pub use codec::{decode, encode, encode_ring, LatLng};
pub use kind::EntityKind;
pub use validation::{
    validate_form, validate_geometry, validate_name, FormErrors, GeometryError,
};
