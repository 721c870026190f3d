// This is free and unencumbered software released into the public domain.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `ACAMERA_LENS_FACING_FRONT`
pub const LENS_FACING_FRONT: i32 = 0;
/// `ACAMERA_LENS_FACING_BACK`
pub const LENS_FACING_BACK: i32 = 1;
/// `ACAMERA_LENS_FACING_EXTERNAL`
pub const LENS_FACING_EXTERNAL: i32 = 2;

/// Which way a camera points relative to the device body.
///
/// Advisory metadata: unlike [`Orientation`](super::Orientation), an
/// unmatched code is not an error and classifies as [`LensFacing::Unknown`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensFacing {
    #[display("front")]
    Front,
    #[display("back")]
    Back,
    #[display("external")]
    External,
    #[display("unknown")]
    Unknown,
}

impl LensFacing {
    pub const fn from_code(code: i32) -> Self {
        match code {
            LENS_FACING_FRONT => LensFacing::Front,
            LENS_FACING_BACK => LensFacing::Back,
            LENS_FACING_EXTERNAL => LensFacing::External,
            _ => LensFacing::Unknown,
        }
    }
}

impl From<i32> for LensFacing {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}
