// This is free and unencumbered software released into the public domain.

use super::{CameraMetadata, CameraResult, CameraStatus};
use alloc::ffi::CString;
use core::{ffi::CStr, ptr::null_mut};
use ndk_sys::{
    ACameraManager, ACameraManager_create, ACameraManager_delete,
    ACameraManager_deleteCameraIdList, ACameraManager_getCameraCharacteristics,
    ACameraManager_getCameraIdList, camera_status_t,
};
use scopeguard::defer;

#[derive(Debug)]
pub struct CameraManager {
    pub(crate) handle: *mut ACameraManager,
}

impl Drop for CameraManager {
    fn drop(&mut self) {
        unsafe {
            ACameraManager_delete(self.handle);
            self.handle = null_mut();
        }
    }
}

impl CameraManager {
    /// Returns `None` if the platform has no camera service.
    pub fn new() -> Option<Self> {
        let handle = unsafe { ACameraManager_create() };
        if handle.is_null() {
            return None;
        }
        Some(Self { handle })
    }

    pub fn get_camera_ids(&self) -> CameraResult<Vec<String>> {
        let mut list_ptr = null_mut();
        CameraStatus::check(unsafe { ACameraManager_getCameraIdList(self.handle, &mut list_ptr) })?;

        defer! {
            unsafe { ACameraManager_deleteCameraIdList(list_ptr); }
        }

        let list = unsafe { &*list_ptr };
        if list.numCameras < 1 {
            return Ok(Vec::new()); // no devices
        }

        let ids = unsafe { core::slice::from_raw_parts(list.cameraIds, list.numCameras as usize) };

        let result: Vec<String> = ids
            .iter()
            .map(|p| unsafe { CStr::from_ptr(*p).to_string_lossy().into_owned() })
            .collect();

        Ok(result)
    }

    pub fn get_camera_characteristics(&self, id: &str) -> CameraResult<CameraMetadata> {
        let id = CString::new(id)
            .map_err(|_| CameraStatus(camera_status_t::ACAMERA_ERROR_INVALID_PARAMETER))?;

        let mut metadata = CameraMetadata::default();
        CameraStatus::check(unsafe {
            ACameraManager_getCameraCharacteristics(self.handle, id.as_ptr(), &mut metadata.handle)
        })?;

        Ok(metadata)
    }
}
