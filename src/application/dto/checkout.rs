use std::path::PathBuf;

/// CheckoutRequest - request DTO for hard-resetting a pod checkout
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// Full pod name (`Foo` or `Foo/Bar`)
    pub pod: String,
    /// Directory holding the `*.podspec.json` files
    pub specs_dir: PathBuf,
    /// Git working tree of the pod
    pub working_dir: PathBuf,
}

impl CheckoutRequest {
    pub fn new(pod: impl Into<String>, specs_dir: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            pod: pod.into(),
            specs_dir,
            working_dir,
        }
    }
}

/// CheckoutResponse - the command that ran, `None` when nothing was pinned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutResponse {
    pub command: Option<String>,
}
