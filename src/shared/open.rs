// This is free and unencumbered software released into the public domain.

use super::{CameraBackend, CameraError, CatalogConfig, DeviceEnumerator, DeviceManager};

cfg_if::cfg_if! {
    if #[cfg(all(feature = "android", target_os = "android"))] {
        pub const DEFAULT_BACKEND: Option<CameraBackend> = Some(CameraBackend::Android);
    } else if #[cfg(all(feature = "v4l2", target_os = "linux"))] {
        pub const DEFAULT_BACKEND: Option<CameraBackend> = Some(CameraBackend::V4l2);
    } else {
        pub const DEFAULT_BACKEND: Option<CameraBackend> = None;
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "android", target_os = "android"))] {
        fn open_android(_config: &CatalogConfig) -> Result<Box<dyn DeviceManager>, CameraError> {
            Ok(Box::new(super::drivers::android::AndroidDeviceManager::open()?))
        }
    } else {
        fn open_android(_config: &CatalogConfig) -> Result<Box<dyn DeviceManager>, CameraError> {
            Err(CameraError::service_unavailable(
                "camera2 backend is not available on this target",
            ))
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "v4l2")] {
        fn open_v4l2(config: &CatalogConfig) -> Result<Box<dyn DeviceManager>, CameraError> {
            Ok(Box::new(super::drivers::v4l2::V4l2DeviceManager::new(
                config.sysfs_root.clone(),
            )))
        }
    } else {
        fn open_v4l2(_config: &CatalogConfig) -> Result<Box<dyn DeviceManager>, CameraError> {
            Err(CameraError::service_unavailable(
                "v4l2 backend is not enabled in this build",
            ))
        }
    }
}

/// Obtains the camera service for `config.backend`, or the platform
/// default when none is set.
pub fn open_device_manager(config: &CatalogConfig) -> Result<Box<dyn DeviceManager>, CameraError> {
    let backend = config.backend.or(DEFAULT_BACKEND).ok_or_else(|| {
        CameraError::service_unavailable("no camera backend available for this target")
    })?;
    match backend {
        CameraBackend::Android => open_android(config),
        CameraBackend::V4l2 => open_v4l2(config),
    }
}

/// Lists the cameras of the configured backend.
pub fn list_cameras(config: &CatalogConfig) -> Result<Vec<super::DeviceRecord>, CameraError> {
    open_enumerator(config)?.list_devices()
}

pub fn open_enumerator(
    config: &CatalogConfig,
) -> Result<DeviceEnumerator<dyn DeviceManager>, CameraError> {
    let manager = open_device_manager(config)?;
    Ok(DeviceEnumerator::from_box(manager).with_diagnostics(config.diagnostics))
}
