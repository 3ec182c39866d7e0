/// Filesystem adapters for file I/O operations
mod file_writer;
mod manifest_store;
mod podspec_writer;
mod spec_reader;
mod spec_repository;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use manifest_store::FileSystemManifestStore;
pub use podspec_writer::FileSystemPodspecWriter;
pub use spec_reader::FileSystemSpecReader;
pub use spec_repository::LocalSpecRepository;
