//! The recommendation engine: filtering, scoring, incentives, ownership
//! cost, and the powertrain advisor, tied together by [`recommend`].
//!
//! Every function here is deterministic and side-effect free; the same
//! catalog and preferences always produce the same ranking.

pub mod advisor;
pub mod filter;
pub mod incentives;
pub mod recommend;
pub mod scoring;
pub mod tco;

#[cfg(test)]
mod tests;
