// This is free and unencumbered software released into the public domain.

//! Android cameras through the NDK camera2 API.

mod camera_manager;
pub use camera_manager::*;

mod camera_metadata;
pub use camera_metadata::*;

mod camera_status;
pub use camera_status::*;

use crate::shared::{CameraError, Characteristics, DeviceManager, DriverResult};
use alloc::borrow::Cow;
use ndk_sys::acamera_metadata_tag;

#[link(name = "camera2ndk")]
unsafe extern "C" {}

#[derive(Debug)]
pub struct AndroidDeviceManager {
    manager: CameraManager,
}

impl AndroidDeviceManager {
    /// Obtains the platform camera service.
    pub fn open() -> Result<Self, CameraError> {
        let manager = CameraManager::new().ok_or_else(|| {
            CameraError::service_unavailable("ACameraManager_create returned no camera manager")
        })?;
        Ok(Self { manager })
    }
}

impl dogma::Named for AndroidDeviceManager {
    fn name(&self) -> Cow<'_, str> {
        "camera2".into()
    }
}

impl DeviceManager for AndroidDeviceManager {
    fn camera_ids(&self) -> DriverResult<Vec<String>> {
        Ok(self.manager.get_camera_ids()?)
    }

    fn characteristics(&self, camera_id: &str) -> DriverResult<Characteristics> {
        let metadata = self.manager.get_camera_characteristics(camera_id)?;

        Ok(Characteristics {
            name: None,
            sensor_orientation: metadata
                .get_i32s(acamera_metadata_tag::ACAMERA_SENSOR_ORIENTATION)
                .and_then(|v| v.first().copied()),
            lens_facing: metadata
                .get_u8s(acamera_metadata_tag::ACAMERA_LENS_FACING)
                .and_then(|v| v.first().map(|&b| b as i32)),
            focal_lengths: metadata
                .get_f32s(acamera_metadata_tag::ACAMERA_LENS_INFO_AVAILABLE_FOCAL_LENGTHS),
        })
    }
}
