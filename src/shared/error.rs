// This is free and unencumbered software released into the public domain.

use std::error::Error as StdError;
use thiserror::Error;

pub type BoxedError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("unrecognized device orientation: {0:?}")]
    UnrecognizedOrientation(String),

    #[error("camera service unavailable: {reason}")]
    ServiceUnavailable {
        reason: String,
        #[source]
        source: Option<BoxedError>,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("driver error while {context}")]
    DriverError {
        context: &'static str,
        #[source]
        source: BoxedError,
    },

    #[error("{0}")]
    Other(String),
}

impl CameraError {
    #[inline]
    pub fn unrecognized_orientation(input: impl Into<String>) -> Self {
        Self::UnrecognizedOrientation(input.into())
    }

    #[inline]
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            reason: reason.into(),
            source: None,
        }
    }

    #[inline]
    pub fn service_unavailable_with(reason: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self::ServiceUnavailable {
            reason: reason.into(),
            source: Some(source.into()),
        }
    }

    #[inline]
    pub fn driver(context: &'static str, source: impl StdError + Send + Sync + 'static) -> Self {
        Self::DriverError {
            context,
            source: Box::new(source),
        }
    }

    #[inline]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// A single device whose characteristics could not be fetched.
///
/// This never fails an enumeration; it is collected alongside the records
/// and logged.
#[derive(Debug, Error)]
#[error("failed to query characteristics of camera {camera_id:?}")]
pub struct DeviceQueryFailed {
    pub camera_id: String,
    #[source]
    pub source: BoxedError,
}

impl DeviceQueryFailed {
    pub fn new(camera_id: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self {
            camera_id: camera_id.into(),
            source: source.into(),
        }
    }
}
