//! Domain modules organized as vertical slices.
//!
//! - `series`: canonical chart series (`Bar`, `Point`), provider wire types
//!   and the conversions between them
//! - `period`: static period → provider query parameter tables

pub mod period;
pub mod series;
