// This is free and unencumbered software released into the public domain.

/// Hardware-reported attributes of one camera.
///
/// Every field is optional: `None` means the backend did not report the
/// characteristic, which is distinct from a zero value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Characteristics {
    pub name: Option<String>,
    /// Clockwise rotation of the sensor, in degrees.
    pub sensor_orientation: Option<i32>,
    /// Raw lens-facing code, see [`LensFacing::from_code`](super::LensFacing::from_code).
    pub lens_facing: Option<i32>,
    /// Available focal lengths in millimeters, primary first.
    pub focal_lengths: Option<Vec<f32>>,
}

impl Characteristics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sensor_orientation(mut self, degrees: i32) -> Self {
        self.sensor_orientation = Some(degrees);
        self
    }

    pub fn with_lens_facing(mut self, code: i32) -> Self {
        self.lens_facing = Some(code);
        self
    }

    pub fn with_focal_lengths(mut self, focal_lengths: Vec<f32>) -> Self {
        self.focal_lengths = Some(focal_lengths);
        self
    }

    pub fn primary_focal_length(&self) -> Option<f32> {
        self.focal_lengths.as_deref()?.first().copied()
    }
}
