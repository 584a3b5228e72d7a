//! Filesystem existence probe
//!
//! `should_be_an_existing_file` and `is_an_existing_file` are the only rules
//! that touch the outside world. They go through a [`FileProbe`] injected
//! into the [`Validator`](crate::Validator), so hosts and tests can replace
//! the real filesystem.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{KnownPaths, NoopListener, Status, Validator};
//!
//! let validator =
//!     Validator::new(NoopListener).with_probe(KnownPaths::from_iter(["/srv/app.toml"]));
//! let result = validator
//!     .value_of_field("Config", "/srv/app.toml")
//!     .check(fieldcheck::Rule::AnExistingFile);
//! assert_eq!(result.status(), Status::Passed);
//! ```

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Answers whether a path exists.
///
/// An `Err` is reported as a missing file.
pub trait FileProbe: Send + Sync {
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

impl<F> FileProbe for F
where
    F: Fn(&Path) -> io::Result<bool> + Send + Sync,
{
    fn exists(&self, path: &Path) -> io::Result<bool> {
        self(path)
    }
}

/// Probe backed by [`Path::try_exists`].
#[cfg(feature = "fs")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

#[cfg(feature = "fs")]
impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }
}

/// Probe used when the `fs` feature is disabled: every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilesystem;

impl FileProbe for NoFilesystem {
    fn exists(&self, _path: &Path) -> io::Result<bool> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no filesystem probe configured",
        ))
    }
}

/// Probe that knows a fixed set of paths.
#[derive(Debug, Clone, Default)]
pub struct KnownPaths {
    paths: HashSet<PathBuf>,
}

impl KnownPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for KnownPaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileProbe for KnownPaths {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.paths.contains(path))
    }
}

#[cfg(feature = "fs")]
pub(crate) fn default_probe() -> Arc<dyn FileProbe> {
    Arc::new(FsProbe)
}

#[cfg(not(feature = "fs"))]
pub(crate) fn default_probe() -> Arc<dyn FileProbe> {
    Arc::new(NoFilesystem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        let probe = KnownPaths::new().with_path("/a").with_path("/b/c");
        assert!(probe.exists(Path::new("/a")).unwrap());
        assert!(probe.exists(Path::new("/b/c")).unwrap());
        assert!(!probe.exists(Path::new("/b")).unwrap());
    }

    #[test]
    fn test_no_filesystem_errors() {
        let error = NoFilesystem.exists(Path::new("/")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::Unsupported);
    }

    #[cfg(feature = "fs")]
    #[test]
    fn test_fs_probe_sees_manifest() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert!(FsProbe.exists(&manifest).unwrap());
        assert!(!FsProbe.exists(&manifest.with_extension("missing")).unwrap());
    }
}
