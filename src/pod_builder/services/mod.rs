mod podspec_emitter;
mod prebuild_planner;
mod spec_overlay;

pub use podspec_emitter::PodspecEmitter;
pub use prebuild_planner::{EntryKind, PlannedEntry, PrebuildPlan, PrebuildPlanner};
pub use spec_overlay::SpecOverlay;
