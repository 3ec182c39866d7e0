use crate::pod_builder::domain::Specification;
use crate::shared::Result;
use std::path::Path;

/// SpecReader port for loading the podspecs of the current dependency graph
pub trait SpecReader {
    /// Reads every podspec found in `specs_dir`
    ///
    /// # Returns
    /// Specifications in a stable order (sorted by file name)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The directory cannot be listed
    /// - A podspec cannot be read or parsed
    fn read_specifications(&self, specs_dir: &Path) -> Result<Vec<Specification>>;
}
