// This is free and unencumbered software released into the public domain.

use crate::shared::{BoxedError, Characteristics};

pub type DriverResult<T> = Result<T, BoxedError>;

/// A platform camera service.
///
/// Listing is expected to either succeed completely or fail; a per-camera
/// characteristics query may fail on its own (for example when the camera
/// was unplugged after listing) without affecting the others.
pub trait DeviceManager: dogma::Named {
    /// Camera identifiers, in the order the platform reports them.
    fn camera_ids(&self) -> DriverResult<Vec<String>>;

    fn characteristics(&self, camera_id: &str) -> DriverResult<Characteristics>;
}
