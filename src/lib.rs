//! pod-prebuild - prebuild CocoaPods dependencies into binary frameworks
//!
//! This library turns the JSON podspecs of an app's dependency graph into
//! resolved items, decides for each pod whether the Podfile consumes it from
//! source or as a prebuilt framework, and emits the matching Podfile entries
//! and synthetic podspecs. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`pod_builder`): podspec model, items, policies and services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pod_prebuild::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = PlanPrebuildUseCase::new(
//!     FileSystemSpecReader::new(),
//!     NoSpecSource,
//!     FileSystemPodspecWriter::new(),
//!     FileSystemPodspecWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let settings = PrebuildSettings::default();
//! let response = use_case.execute(PlanRequest::new(PathBuf::from("Specs")), &settings)?;
//! print!("{}", response.render());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod pod_builder;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemManifestStore, FileSystemPodspecWriter, FileSystemSpecReader,
        FileSystemWriter, LocalSpecRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::process::ShellCommandRunner;
    pub use crate::application::dto::{
        CheckoutRequest, CheckoutResponse, PlanRequest, PlanResponse, PrebuildSettings,
        RestoreRequest,
    };
    pub use crate::application::use_cases::{
        load_items, CheckoutPodUseCase, PlanPrebuildUseCase, RestoreAllUseCase,
    };
    pub use crate::pod_builder::domain::{
        CheckoutOptions, CheckoutOverride, PodSpecDocument, PodfileItem, PodfileItems,
        PrebuildConfig, SpecCatalog, Specification,
    };
    pub use crate::pod_builder::policies::{PrebuiltPolicy, PrebuiltReason};
    pub use crate::pod_builder::services::{
        EntryKind, PodspecEmitter, PrebuildPlan, PrebuildPlanner, SpecOverlay,
    };
    pub use crate::ports::outbound::{
        ArtifactLocator, CommandRunner, ManifestStore, NoSpecSource, OutputPresenter,
        PodspecWriter, ProgressReporter, SpecReader, SpecSource,
    };
    pub use crate::shared::Result;
}
