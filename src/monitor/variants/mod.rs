mod aat_time;
mod final_glide;
mod glide_terrain;
mod start_rules;
mod sunset;
mod wind;

pub use aat_time::AatEarlyArrival;
pub use final_glide::{FinalGlideTransition, GlidePhase};
pub use glide_terrain::GlideTerrain;
pub use start_rules::StartRuleCompliance;
pub use sunset::{SunEphemeris, SunsetArrival};
pub use wind::WindShift;
