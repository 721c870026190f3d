// This is free and unencumbered software released into the public domain.

use core::{mem::zeroed, ptr::null_mut, slice};
use ndk_sys::{
    ACameraMetadata, ACameraMetadata_const_entry, ACameraMetadata_free,
    ACameraMetadata_getConstEntry, acamera_metadata_tag, camera_status_t,
};

/// Owned characteristics of one camera.
#[derive(Debug)]
pub struct CameraMetadata {
    pub(crate) handle: *mut ACameraMetadata,
}

impl Default for CameraMetadata {
    fn default() -> Self {
        Self { handle: null_mut() }
    }
}

impl Drop for CameraMetadata {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe { ACameraMetadata_free(self.handle) };
            self.handle = null_mut();
        }
    }
}

impl CameraMetadata {
    /// Looks up `tag`; `None` if the camera does not report it.
    fn entry(&self, tag: acamera_metadata_tag) -> Option<ACameraMetadata_const_entry> {
        if self.handle.is_null() {
            return None;
        }
        let mut entry: ACameraMetadata_const_entry = unsafe { zeroed() };
        let status = unsafe { ACameraMetadata_getConstEntry(self.handle, tag.0, &mut entry) };
        if status != camera_status_t::ACAMERA_OK {
            return None;
        }
        Some(entry)
    }

    pub fn get_u8s(&self, tag: acamera_metadata_tag) -> Option<Vec<u8>> {
        let entry = self.entry(tag)?;
        Some(unsafe { copy_slice(entry.data.u8_, entry.count) })
    }

    pub fn get_i32s(&self, tag: acamera_metadata_tag) -> Option<Vec<i32>> {
        let entry = self.entry(tag)?;
        Some(unsafe { copy_slice(entry.data.i32_, entry.count) })
    }

    pub fn get_f32s(&self, tag: acamera_metadata_tag) -> Option<Vec<f32>> {
        let entry = self.entry(tag)?;
        Some(unsafe { copy_slice(entry.data.f, entry.count) })
    }
}

/// # Safety
///
/// `data` must be null or point to `count` initialized elements.
unsafe fn copy_slice<T: Copy>(data: *const T, count: u32) -> Vec<T> {
    if data.is_null() || count == 0 {
        return Vec::new();
    }
    unsafe { slice::from_raw_parts(data, count as usize) }.to_vec()
}
