use crate::shared::error::PodBuilderError;
use crate::shared::Result;
use std::path::{Component, Path, PathBuf};

/// Lexically computes `to` relative to `from`.
///
/// Neither path touches the filesystem. `.` components are dropped and `..`
/// components cancel the component before them.
///
/// # Errors
/// Fails when `from` still climbs above a directory whose name is unknown
/// (e.g. `../App` against `.`), or when only one of the paths is absolute.
pub fn relative_path(from: &Path, to: &Path) -> Result<PathBuf> {
    if from.has_root() != to.has_root() {
        return Err(PodBuilderError::InvalidProjectPath {
            path: from.to_path_buf(),
            reason: format!(
                "cannot relate it to {}: only one of the paths is absolute",
                to.display()
            ),
        }
        .into());
    }

    let from_components = normalized(from);
    let to_components = normalized(to);

    let common_len = from_components
        .iter()
        .zip(to_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if from_components[common_len..].contains(&Component::ParentDir) {
        return Err(PodBuilderError::InvalidProjectPath {
            path: from.to_path_buf(),
            reason: format!(
                "cannot relate it to {}: it climbs above a directory that is not named",
                to.display()
            ),
        }
        .into());
    }

    let mut result = PathBuf::new();
    for _ in common_len..from_components.len() {
        result.push("..");
    }
    for part in &to_components[common_len..] {
        result.push(part.as_os_str());
    }

    if result.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(result)
    }
}

fn normalized(path: &Path) -> Vec<Component<'_>> {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }
    components
}
