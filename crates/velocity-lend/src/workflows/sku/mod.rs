//! Product-identity matching across fragmented system identifiers.

mod domain;
mod heuristics;

pub use domain::{SkuIdentifiers, SkuMatch};
pub use heuristics::heuristic_match;
