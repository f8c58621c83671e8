//! North Haven map data
//!
//! The town is authored in code: two crossing roads, their street signs,
//! and the six places you can visit.

mod town;

pub use town::*;
