//! Style configuration and resolution.
//!
//! A [`StyleConfig`] holds the user's formatting choices in human units
//! (points, centimeters, multipliers). [`resolve`] validates it and converts it
//! into a [`ResolvedStyles`]: one paragraph style per block kind plus the page
//! setup, all lengths in twips.

mod config;
mod resolve;

pub use config::StyleConfig;
pub use resolve::{resolve, ResolvedStyles, StyleResolver, LINE_SPACING_UNIT};
