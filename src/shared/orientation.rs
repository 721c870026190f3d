// This is free and unencumbered software released into the public domain.

//! Device orientation and its wire tokens.
//!
//! The tokens are case-sensitive and matched exactly; no trimming or case
//! folding is applied when decoding.

use crate::shared::CameraError;
use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Orientation {
    PortraitUp,
    PortraitDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::PortraitUp,
        Orientation::PortraitDown,
        Orientation::LandscapeLeft,
        Orientation::LandscapeRight,
    ];

    /// Returns the wire token for this orientation.
    pub const fn encode(self) -> &'static str {
        match self {
            Orientation::PortraitUp => "portraitUp",
            Orientation::PortraitDown => "portraitDown",
            Orientation::LandscapeLeft => "landscapeLeft",
            Orientation::LandscapeRight => "landscapeRight",
        }
    }

    /// Parses a wire token.
    ///
    /// Fails with [`CameraError::UnrecognizedOrientation`] unless `input`
    /// is exactly one of the four tokens.
    pub fn decode(input: &str) -> Result<Self, CameraError> {
        match input {
            "portraitUp" => Ok(Orientation::PortraitUp),
            "portraitDown" => Ok(Orientation::PortraitDown),
            "landscapeLeft" => Ok(Orientation::LandscapeLeft),
            "landscapeRight" => Ok(Orientation::LandscapeRight),
            _ => Err(CameraError::unrecognized_orientation(input)),
        }
    }

    /// Numeric code used across the C ABI.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode())
    }
}

impl FromStr for Orientation {
    type Err = CameraError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::decode(input)
    }
}

impl TryFrom<&str> for Orientation {
    type Error = CameraError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::decode(input)
    }
}

impl TryFrom<String> for Orientation {
    type Error = CameraError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::decode(&input)
    }
}

impl TryFrom<u32> for Orientation {
    type Error = CameraError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|o| o.code() == code)
            .ok_or_else(|| CameraError::unrecognized_orientation(format!("code {code}")))
    }
}

impl From<Orientation> for &'static str {
    fn from(orientation: Orientation) -> Self {
        orientation.encode()
    }
}
