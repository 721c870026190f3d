// This is free and unencumbered software released into the public domain.

use crate::shared::{CameraError, DeviceManager, DeviceQueryFailed, DeviceRecord};
use std::collections::HashSet;

/// The outcome of one enumeration pass.
#[derive(Debug, Default)]
pub struct Enumeration {
    /// One record per camera, in the order the device manager listed them.
    pub records: Vec<DeviceRecord>,
    /// Cameras that were listed but could not be queried.
    pub failures: Vec<DeviceQueryFailed>,
}

/// Lists cameras through a [`DeviceManager`] and normalizes their
/// characteristics into [`DeviceRecord`]s.
///
/// Listing the camera ids must succeed; a failure there is reported as
/// [`CameraError::ServiceUnavailable`]. Querying an individual camera is
/// best-effort: a camera whose characteristics cannot be fetched is left
/// out of the result and recorded as a [`DeviceQueryFailed`].
///
/// Each call queries the device manager afresh. Nothing is cached.
pub struct DeviceEnumerator<M: DeviceManager + ?Sized> {
    manager: Box<M>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    diagnostics: bool,
}

impl<M: DeviceManager> DeviceEnumerator<M> {
    pub fn new(manager: M) -> Self {
        Self::from_box(Box::new(manager))
    }
}

impl<M: DeviceManager + ?Sized> DeviceEnumerator<M> {
    pub fn from_box(manager: Box<M>) -> Self {
        Self {
            manager,
            diagnostics: false,
        }
    }

    /// Log every normalized record at debug level.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Fetches and normalizes a single camera.
    pub fn query(&self, camera_id: &str) -> Result<DeviceRecord, DeviceQueryFailed> {
        self.manager
            .characteristics(camera_id)
            .map(|characteristics| DeviceRecord::new(camera_id, characteristics))
            .map_err(|source| DeviceQueryFailed {
                camera_id: camera_id.to_string(),
                source,
            })
    }

    /// Enumerates all cameras, returning the failed ones alongside the
    /// records.
    pub fn enumerate(&self) -> Result<Enumeration, CameraError> {
        let camera_ids = self
            .manager
            .camera_ids()
            .map_err(|source| CameraError::service_unavailable_with("failed to list camera ids", source))?;

        #[cfg(feature = "tracing")]
        asimov_module::tracing::debug!(
            target: "asimov_camera_catalog",
            backend = %dogma::Named::name(&*self.manager),
            count = camera_ids.len(),
            "enumerating cameras"
        );

        let mut seen = HashSet::with_capacity(camera_ids.len());
        let enumeration = camera_ids
            .into_iter()
            .filter(|camera_id| {
                let first = seen.insert(camera_id.clone());
                #[cfg(feature = "tracing")]
                {
                    if !first {
                        asimov_module::tracing::warn!(
                            target: "asimov_camera_catalog",
                            camera_id = %camera_id,
                            "camera listed more than once, ignoring duplicate"
                        );
                    }
                }
                first
            })
            .map(|camera_id| self.query(&camera_id))
            .fold(Enumeration::default(), |mut acc, result| {
                match result {
                    Ok(record) => acc.records.push(record),
                    Err(failure) => acc.failures.push(failure),
                }
                acc
            });

        #[cfg(feature = "tracing")]
        {
            use asimov_module::tracing::debug;
            if self.diagnostics {
                for record in &enumeration.records {
                    debug!(target: "asimov_camera_catalog", ?record, "camera");
                }
            }
            debug!(
                target: "asimov_camera_catalog",
                found = enumeration.records.len(),
                failed = enumeration.failures.len(),
                "enumeration finished"
            );
        }

        Ok(enumeration)
    }

    /// Enumerates all cameras.
    ///
    /// Cameras that could not be queried are left out, so the result may be
    /// shorter than the list the platform reported. The failures are only
    /// logged when the `tracing` feature is enabled; use [`enumerate`]
    /// to inspect them otherwise.
    ///
    /// [`enumerate`]: Self::enumerate
    pub fn list_devices(&self) -> Result<Vec<DeviceRecord>, CameraError> {
        let Enumeration { records, failures } = self.enumerate()?;
        for failure in &failures {
            report_failure(failure);
        }
        Ok(records)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn report_failure(failure: &DeviceQueryFailed) {
    #[cfg(feature = "tracing")]
    asimov_module::tracing::warn!(
        target: "asimov_camera_catalog",
        camera_id = %failure.camera_id,
        error = %failure.source,
        "skipping camera"
    );
}
