/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, shell, console, etc.).
pub mod artifact_locator;
pub mod command_runner;
pub mod manifest_store;
pub mod output_presenter;
pub mod podspec_writer;
pub mod progress_reporter;
pub mod spec_reader;
pub mod spec_source;

pub use artifact_locator::ArtifactLocator;
pub use command_runner::CommandRunner;
pub use manifest_store::ManifestStore;
pub use output_presenter::OutputPresenter;
pub use podspec_writer::PodspecWriter;
pub use progress_reporter::ProgressReporter;
pub use spec_reader::SpecReader;
pub use spec_source::{NoSpecSource, SpecSource};
