mod prebuilt_policy;

pub use prebuilt_policy::{PrebuiltPolicy, PrebuiltReason};
