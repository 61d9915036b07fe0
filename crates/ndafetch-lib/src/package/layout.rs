use crate::error::NdaFetchError;
use std::path::{Component, Path, PathBuf};

/// Turns a download alias into a path that stays below the package directory.
/// `.` segments are dropped; anything that could escape is rejected.
pub fn sanitize_relative_path(alias: &str) -> Result<PathBuf, NdaFetchError> {
    let unsafe_path = |reason: &str| NdaFetchError::UnsafePath {
        path: alias.to_string(),
        reason: reason.to_string(),
    };

    let mut sanitized = PathBuf::new();
    for component in Path::new(alias).components() {
        match component {
            Component::Normal(segment) => sanitized.push(segment),
            Component::CurDir => continue,
            Component::ParentDir => return Err(unsafe_path("parent directory reference")),
            Component::RootDir => return Err(unsafe_path("absolute path")),
            Component::Prefix(_) => return Err(unsafe_path("path prefix")),
        }
    }

    if sanitized.as_os_str().is_empty() {
        return Err(unsafe_path("empty path"));
    }
    Ok(sanitized)
}

/// `<output_root>/<package_name>`; the name must be one plain path segment.
pub fn package_dir(output_root: &Path, package_name: &str) -> Result<PathBuf, NdaFetchError> {
    let mut components = Path::new(package_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(segment)), None) if segment == package_name => {
            Ok(output_root.join(segment))
        }
        _ => Err(NdaFetchError::UnsafePath {
            path: package_name.to_string(),
            reason: "package name must be a single directory name".to_string(),
        }),
    }
}

pub fn file_output_path(package_dir: &Path, alias: &str) -> Result<PathBuf, NdaFetchError> {
    Ok(package_dir.join(sanitize_relative_path(alias)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_alias_is_kept() {
        let path = file_output_path(Path::new("/out/abc"), "sub/dir/x.txt").unwrap();

        assert_eq!(path, PathBuf::from("/out/abc/sub/dir/x.txt"));
        assert_eq!(path.parent(), Some(Path::new("/out/abc/sub/dir")));
    }

    #[test]
    fn test_current_dir_segments_are_dropped() {
        assert_eq!(
            sanitize_relative_path("./sub/./y.txt").unwrap(),
            PathBuf::from("sub/y.txt")
        );
    }

    #[test]
    fn test_traversal_is_rejected() {
        for alias in ["../x", "sub/../../x", "/etc/passwd", "", "."] {
            assert!(
                matches!(
                    sanitize_relative_path(alias),
                    Err(NdaFetchError::UnsafePath { .. })
                ),
                "alias {:?} should be rejected",
                alias
            );
        }
    }

    #[test]
    fn test_package_dir_requires_plain_name() {
        assert_eq!(
            package_dir(Path::new("/out"), "abc").unwrap(),
            PathBuf::from("/out/abc")
        );
        for name in ["", "..", "a/b", "/abs", "./abc"] {
            assert!(
                package_dir(Path::new("/out"), name).is_err(),
                "package name {:?} should be rejected",
                name
            );
        }
    }
}
