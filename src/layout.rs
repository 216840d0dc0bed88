use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Directory layout for a vendored GLAD loader rooted at a base directory.
///
/// The layout owns no state beyond the base path; everything else is derived.
#[derive(Debug, Clone)]
pub struct Layout {
    base: Utf8PathBuf,
}

impl Layout {
    pub fn new(base: impl Into<Utf8PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Utf8Path {
        &self.base
    }

    pub fn include_glad(&self) -> Utf8PathBuf {
        self.base.join("include").join("glad")
    }

    pub fn include_khr(&self) -> Utf8PathBuf {
        self.base.join("include").join("KHR")
    }

    pub fn src_dir(&self) -> Utf8PathBuf {
        self.base.join("src")
    }

    /// The three directories the bootstrapper guarantees.
    pub fn dirs(&self) -> [Utf8PathBuf; 3] {
        [self.include_glad(), self.include_khr(), self.src_dir()]
    }

    /// Loader files the manual generator step is expected to drop in.
    pub fn loader_files(&self) -> [Utf8PathBuf; 3] {
        [
            self.include_glad().join("glad.h"),
            self.include_khr().join("khrplatform.h"),
            self.src_dir().join("glad.c"),
        ]
    }

    /// Ensure every layout directory exists, creating parents as needed.
    /// Idempotent: existing directories and their contents are left alone.
    pub fn ensure(&self) -> Result<()> {
        for dir in self.dirs() {
            fs::create_dir_all(dir.as_std_path())
                .with_context(|| format!("creating directory {}", dir))?;
            tracing::debug!("ensured {}", dir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> Utf8PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("glad-setup-test-{ts}"));
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    #[test]
    fn ensure_creates_exactly_the_layout_dirs() {
        let root = unique_temp_dir();
        let layout = Layout::new(root.join("external").join("glad"));

        layout.ensure().unwrap();

        assert!(layout.include_glad().is_dir());
        assert!(layout.include_khr().is_dir());
        assert!(layout.src_dir().is_dir());
        let entries: Vec<_> = fs::read_dir(layout.base().as_std_path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 2); // include/ and src/

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn ensure_is_idempotent() {
        let root = unique_temp_dir();
        let layout = Layout::new(root.clone());

        layout.ensure().unwrap();
        layout.ensure().unwrap();

        for dir in layout.dirs() {
            assert!(dir.is_dir());
        }

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn ensure_leaves_existing_files_alone() {
        let root = unique_temp_dir();
        let layout = Layout::new(root.clone());
        layout.ensure().unwrap();

        let marker = layout.include_glad().join("foo.txt");
        fs::write(marker.as_std_path(), "keep me").unwrap();

        layout.ensure().unwrap();

        let contents = fs::read_to_string(marker.as_std_path()).unwrap();
        assert_eq!(contents, "keep me");

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn ensure_fails_when_target_is_a_file() {
        let root = unique_temp_dir();
        let layout = Layout::new(root.clone());
        fs::create_dir_all(root.as_std_path()).unwrap();
        fs::write(layout.src_dir().as_std_path(), "not a directory").unwrap();

        let err = layout.ensure().unwrap_err();
        assert!(err.to_string().contains("creating directory"));

        let _ = fs::remove_dir_all(root.as_std_path());
    }
}
