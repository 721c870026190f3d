// This is free and unencumbered software released into the public domain.

//! CLI helpers (error reporting, verbosity handling).

use crate::shared::{CameraError, CatalogConfig, DeviceRecord, Enumeration, open_enumerator};
use asimov_module::SysexitsError::{self, *};
use clientele::StandardOptions;

pub fn handle_error(err: &CameraError, flags: &StandardOptions) -> SysexitsError {
    #[cfg(feature = "tracing")]
    {
        use asimov_module::tracing::{debug, error};

        error!(target: "asimov_camera_catalog", %err, "camera command failed");

        if flags.debug || flags.verbose >= 2 {
            debug!(target: "asimov_camera_catalog", ?err, "detailed error");
        }
    }

    report_error(err, flags);
    map_error_to_sysexit(err)
}

pub fn info_user(flags: &StandardOptions, msg: &str) {
    if flags.debug || flags.verbose >= 1 {
        eprintln!("INFO: {msg}");
    }

    #[cfg(feature = "tracing")]
    asimov_module::tracing::info!(target: "asimov_camera_catalog", "{msg}");
}

pub fn warn_user(flags: &StandardOptions, msg: &str) {
    if flags.debug || flags.verbose >= 1 {
        eprintln!("WARN: {msg}");
    }

    #[cfg(feature = "tracing")]
    asimov_module::tracing::warn!(target: "asimov_camera_catalog", "{msg}");
}

pub fn warn_user_with_error(flags: &StandardOptions, msg: &str, error: &dyn std::error::Error) {
    if flags.debug || flags.verbose >= 2 {
        eprintln!("WARN: {msg}: {error}");
    } else if flags.verbose >= 1 {
        eprintln!("WARN: {msg}");
    }

    #[cfg(feature = "tracing")]
    asimov_module::tracing::warn!(target: "asimov_camera_catalog", error = %error, "{msg}");
}

/// Enumerates cameras, reporting each camera that could not be queried as
/// a warning instead of failing.
pub fn list_cameras(
    flags: &StandardOptions,
    config: &CatalogConfig,
) -> Result<Vec<DeviceRecord>, CameraError> {
    let enumerator = open_enumerator(config)?;
    info_user(
        flags,
        &format!(
            "enumerating cameras via {}",
            dogma::Named::name(enumerator.manager())
        ),
    );

    let Enumeration { records, failures } = enumerator.enumerate()?;
    for failure in &failures {
        warn_user_with_error(
            flags,
            &format!("skipping camera {}", failure.camera_id),
            &*failure.source,
        );
    }
    Ok(records)
}

fn report_error(err: &CameraError, flags: &StandardOptions) {
    use std::error::Error as _;
    use std::io::Write;

    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "ERROR: {err}");

    if flags.debug || flags.verbose >= 2 {
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = writeln!(stderr, "  Caused by: {}", cause);
            source = cause.source();
        }
    }
}

pub fn map_error_to_sysexit(err: &CameraError) -> SysexitsError {
    match err {
        CameraError::ServiceUnavailable { .. } => EX_UNAVAILABLE,
        CameraError::UnrecognizedOrientation(_) => EX_USAGE,
        CameraError::InvalidConfig(_) => EX_USAGE,
        CameraError::DriverError { .. } => EX_SOFTWARE,
        CameraError::Other(_) => EX_SOFTWARE,
    }
}
