use crate::pod_builder::domain::specification::sorted_versions;
use crate::ports::outbound::SpecSource;
use std::fs;
use std::path::{Path, PathBuf};

/// Sharded spec repos nest pods as `Specs/a/b/c/<Name>`
const MAX_SHARD_DEPTH: usize = 4;

/// LocalSpecRepository adapter reading versions from a checked-out spec repo
///
/// Two layouts are understood:
/// - flat: `<repo>/<Name>/<version>/`
/// - CDN style: `<repo>/Specs/**/<Name>/<version>/`
pub struct LocalSpecRepository {
    root: PathBuf,
}

impl LocalSpecRepository {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn pod_dir(&self, root_name: &str) -> Option<PathBuf> {
        let flat = self.root.join(root_name);
        if flat.is_dir() {
            return Some(flat);
        }
        find_dir_named(&self.root.join("Specs"), root_name, MAX_SHARD_DEPTH)
    }
}

impl SpecSource for LocalSpecRepository {
    fn versions(&self, root_name: &str) -> Option<Vec<String>> {
        let pod_dir = self.pod_dir(root_name)?;
        let versions: Vec<String> = fs::read_dir(&pod_dir)
            .ok()?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .collect();

        if versions.is_empty() {
            return None;
        }
        Some(sorted_versions(versions))
    }
}

fn find_dir_named(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let candidate = dir.join(name);
    if candidate.is_dir() {
        return Some(candidate);
    }
    if depth == 0 {
        return None;
    }

    let mut children: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    children.sort();

    children
        .iter()
        .find_map(|child| find_dir_named(child, name, depth - 1))
}
