/// Core of the prebuild pipeline: podspec model, dependency items and the
/// services that turn them into Podfile entries and synthetic podspecs.
pub mod domain;
pub mod policies;
pub mod services;
