// This is free and unencumbered software released into the public domain.

use crate::shared::CameraError;
use core::str::FromStr;
use derive_more::Display;
use std::path::PathBuf;

pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/video4linux";

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum CameraBackend {
    #[display("android")]
    Android,
    #[display("v4l2")]
    V4l2,
}

impl FromStr for CameraBackend {
    type Err = CameraError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "android" | "camera2" => Ok(CameraBackend::Android),
            "v4l2" | "video4linux" => Ok(CameraBackend::V4l2),
            other => Err(CameraError::invalid_config(format!(
                "unknown camera backend: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Force a backend instead of the platform default.
    pub backend: Option<CameraBackend>,
    pub sysfs_root: PathBuf,
    pub diagnostics: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: None,
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
            diagnostics: false,
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: CameraBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_sysfs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sysfs_root = root.into();
        self
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.backend, None);
        assert_eq!(config.sysfs_root, PathBuf::from("/sys/class/video4linux"));
        assert!(!config.diagnostics);
    }

    #[test]
    fn builder() {
        let config = CatalogConfig::new()
            .with_backend(CameraBackend::V4l2)
            .with_sysfs_root("/tmp/v4l")
            .with_diagnostics(true);
        assert_eq!(config.backend, Some(CameraBackend::V4l2));
        assert_eq!(config.sysfs_root, PathBuf::from("/tmp/v4l"));
        assert!(config.diagnostics);
    }

    #[test]
    fn parse_backend() {
        assert_eq!("v4l2".parse::<CameraBackend>().unwrap(), CameraBackend::V4l2);
        assert_eq!(" Android ".parse::<CameraBackend>().unwrap(), CameraBackend::Android);
        assert_eq!("camera2".parse::<CameraBackend>().unwrap(), CameraBackend::Android);
        assert_eq!(CameraBackend::V4l2.to_string(), "v4l2");
        assert!(matches!(
            "dshow".parse::<CameraBackend>(),
            Err(CameraError::InvalidConfig(_))
        ));
    }
}
