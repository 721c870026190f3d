// This is free and unencumbered software released into the public domain.

mod characteristics;
pub use characteristics::*;

mod config;
pub use config::*;

pub mod drivers {
    #[cfg(all(feature = "android", target_os = "android"))]
    pub mod android;

    #[cfg(feature = "v4l2")]
    pub mod v4l2;
}

mod enumerator;
pub use enumerator::*;

mod error;
pub use error::*;

mod lens;
pub use lens::*;

mod manager;
pub use manager::*;

mod open;
pub use open::*;

mod orientation;
pub use orientation::*;

mod record;
pub use record::*;
