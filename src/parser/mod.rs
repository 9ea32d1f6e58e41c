//! Build report parsing
//!
//! Turns the route table printed by `next build` into [`RouteRecord`]s:
//! - Size token normalization to kilobytes
//! - Route marker classification
//! - Line-oriented table row matching

pub mod route;
pub mod size;
pub mod table;

pub use route::{classify, RouteRecord, RouteType};
pub use size::parse_size_to_kb;
pub use table::parse_build_table;
