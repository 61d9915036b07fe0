use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchOptions {
    /// Log failed files and packages and carry on instead of stopping at the first error.
    pub keep_going: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PackageReport {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}
