/// SpecSource port for the versions a spec repository offers per pod
pub trait SpecSource {
    /// Known versions of the root pod `root_name`, or `None` when the
    /// repository doesn't know the pod
    fn versions(&self, root_name: &str) -> Option<Vec<String>>;
}

/// SpecSource that knows nothing; items fall back to their own version
pub struct NoSpecSource;

impl SpecSource for NoSpecSource {
    fn versions(&self, _root_name: &str) -> Option<Vec<String>> {
        None
    }
}

impl<T: SpecSource + ?Sized> SpecSource for Box<T> {
    fn versions(&self, root_name: &str) -> Option<Vec<String>> {
        (**self).versions(root_name)
    }
}
