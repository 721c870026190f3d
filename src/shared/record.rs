// This is free and unencumbered software released into the public domain.

use crate::shared::{CameraError, Characteristics, LensFacing};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A camera and its normalized characteristics.
///
/// Serializes to a flat map with the keys `cameraId`, `name`,
/// `sensorOrientation`, `lensFacing` and `focalLength`; optional keys are
/// omitted when the backend did not report them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub camera_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_orientation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens_facing: Option<LensFacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f32>,
}

impl DeviceRecord {
    pub fn new(camera_id: impl Into<String>, characteristics: Characteristics) -> Self {
        let camera_id = camera_id.into();
        let focal_length = characteristics.primary_focal_length();
        Self {
            name: characteristics.name.unwrap_or_else(|| camera_id.clone()),
            sensor_orientation: characteristics.sensor_orientation,
            lens_facing: characteristics.lens_facing.map(LensFacing::from_code),
            focal_length,
            camera_id,
        }
    }

    pub fn to_map(&self) -> Result<Map<String, Value>, CameraError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(CameraError::other(format!(
                "device record serialized to a non-object: {other}"
            ))),
            Err(e) => Err(CameraError::driver("serializing device record", e)),
        }
    }
}
