/// Mock implementations for testing
mod mock_artifact_locator;
mod mock_command_runner;
mod mock_manifest_store;
mod mock_podspec_writer;
mod mock_progress_reporter;
mod mock_spec_reader;
mod mock_spec_source;

pub use mock_artifact_locator::MockArtifactLocator;
pub use mock_command_runner::MockCommandRunner;
pub use mock_manifest_store::MockManifestStore;
pub use mock_podspec_writer::MockPodspecWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_spec_reader::MockSpecReader;
pub use mock_spec_source::MockSpecSource;
