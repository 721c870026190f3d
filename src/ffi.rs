// This is free and unencumbered software released into the public domain.

// C ABI for plugin hosts.
// Cameras are returned as a JSON array of flat records so the host needs no
// knowledge of Rust types.

use crate::shared::{CameraError, CatalogConfig, Orientation, list_cameras};
use core::ffi::c_char;
use core::ptr;
use std::ffi::{CStr, CString};

/// Error codes returned by the FFI API.
///
/// These map directly from [`CameraError`] plus a few FFI-specific cases.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AsimovCameraErrorCode {
    /// No error.
    Ok = 0,
    /// The platform camera service could not be obtained or listed.
    ServiceUnavailable = 1,
    /// An orientation token or code outside the known set.
    UnrecognizedOrientation = 2,
    /// Underlying driver or serialization error.
    DriverError = 3,
    /// Invalid arguments passed via the FFI boundary.
    InvalidArgument = 4,
}

/// Map internal `CameraError` to FFI error codes.
impl From<CameraError> for AsimovCameraErrorCode {
    fn from(err: CameraError) -> Self {
        match err {
            CameraError::ServiceUnavailable { .. } => AsimovCameraErrorCode::ServiceUnavailable,
            CameraError::UnrecognizedOrientation(_) => {
                AsimovCameraErrorCode::UnrecognizedOrientation
            },
            CameraError::InvalidConfig(_) => AsimovCameraErrorCode::InvalidArgument,
            CameraError::DriverError { .. } | CameraError::Other(_) => {
                AsimovCameraErrorCode::DriverError
            },
        }
    }
}

/// Serialize the cameras of the default backend as a JSON array.
///
/// On success `*out_json` receives a NUL-terminated string that must be
/// released with [`asimov_camera_string_free`].
#[unsafe(no_mangle)]
pub extern "C" fn asimov_camera_list_json(out_json: *mut *mut c_char) -> AsimovCameraErrorCode {
    if out_json.is_null() {
        return AsimovCameraErrorCode::InvalidArgument;
    }

    let json = match cameras_json(&CatalogConfig::default()) {
        Ok(json) => json,
        Err(e) => return e.into(),
    };

    unsafe {
        *out_json = json.into_raw();
    }
    AsimovCameraErrorCode::Ok
}

fn cameras_json(config: &CatalogConfig) -> Result<CString, CameraError> {
    let cameras = list_cameras(config)?;
    let json = serde_json::to_string(&cameras)
        .map_err(|e| CameraError::driver("serializing camera list", e))?;
    CString::new(json).map_err(|e| CameraError::driver("converting camera list", e))
}

/// Free a string returned by this library. `NULL` is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn asimov_camera_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(s));
    }
}

/// Wire token for an orientation code (0..=3), or `NULL` for any other code.
///
/// The returned string is static and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn asimov_camera_orientation_encode(code: u32) -> *const c_char {
    match Orientation::try_from(code) {
        Ok(o) => orientation_c_str(o).as_ptr(),
        Err(_) => ptr::null(),
    }
}

/// Parse an orientation token into its numeric code.
#[unsafe(no_mangle)]
pub extern "C" fn asimov_camera_orientation_decode(
    token: *const c_char,
    out_code: *mut u32,
) -> AsimovCameraErrorCode {
    if token.is_null() || out_code.is_null() {
        return AsimovCameraErrorCode::InvalidArgument;
    }

    let token = unsafe { CStr::from_ptr(token) };
    let Ok(token) = token.to_str() else {
        return AsimovCameraErrorCode::UnrecognizedOrientation;
    };

    match Orientation::decode(token) {
        Ok(o) => {
            unsafe {
                *out_code = o.code();
            }
            AsimovCameraErrorCode::Ok
        },
        Err(e) => e.into(),
    }
}

fn orientation_c_str(orientation: Orientation) -> &'static CStr {
    match orientation {
        Orientation::PortraitUp => c"portraitUp",
        Orientation::PortraitDown => c"portraitDown",
        Orientation::LandscapeLeft => c"landscapeLeft",
        Orientation::LandscapeRight => c"landscapeRight",
    }
}
