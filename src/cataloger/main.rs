// This is free and unencumbered software released into the public domain.

#[cfg(not(feature = "std"))]
compile_error!("asimov-camera-cataloger requires the 'std' feature");

use asimov_camera_catalog::{
    cli,
    shared::{CameraBackend, CameraError, CatalogConfig, DeviceRecord, Orientation},
};
use asimov_module::SysexitsError::{self, *};
use clap::Parser;
use clientele::StandardOptions;
use std::{error::Error as StdError, path::PathBuf};

#[derive(Debug, Parser)]
struct Options {
    #[clap(flatten)]
    flags: StandardOptions,

    #[arg(
        value_name = "FORMAT",
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text"
    )]
    output: OutputFormat,

    /// Camera backend to use instead of the platform default
    #[arg(long, value_name = "BACKEND")]
    backend: Option<CameraBackend>,

    /// Root of the video4linux sysfs tree
    #[arg(long, value_name = "PATH")]
    sysfs_root: Option<PathBuf>,

    /// Validate orientation tokens and print them instead of listing cameras
    #[arg(long = "orientation", value_name = "TOKEN")]
    orientations: Vec<String>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Jsonl,
    Json,
}

pub fn main() -> Result<SysexitsError, Box<dyn StdError>> {
    asimov_module::dotenv().ok();
    let args = asimov_module::args_os()?;
    let options = Options::parse_from(args);

    if options.flags.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(EX_OK);
    }

    if options.flags.license {
        print!("{}", include_str!("../../UNLICENSE"));
        return Ok(EX_OK);
    }

    #[cfg(feature = "tracing")]
    asimov_module::init_tracing_subscriber(&options.flags).expect("failed to initialize logging");

    let result = if options.orientations.is_empty() {
        run_cataloger(&options)
    } else {
        run_orientations(&options)
    };

    let exit_code = match result {
        Ok(()) => EX_OK,
        Err(err) => cli::handle_error(&err, &options.flags),
    };

    Ok(exit_code)
}

fn run_cataloger(options: &Options) -> Result<(), CameraError> {
    let mut config = CatalogConfig::new()
        .with_diagnostics(options.flags.debug || options.flags.verbose >= 3);
    if let Some(backend) = options.backend {
        config = config.with_backend(backend);
    }
    if let Some(root) = &options.sysfs_root {
        config = config.with_sysfs_root(root);
    }

    let cameras = cli::list_cameras(&options.flags, &config)?;
    if cameras.is_empty() {
        cli::warn_user(&options.flags, "no camera devices found");
    }

    match options.output {
        OutputFormat::Text => {
            for camera in &cameras {
                println!("{}", describe(camera));
            }
        },
        OutputFormat::Jsonl => {
            for camera in &cameras {
                let line = serde_json::to_string(camera)
                    .map_err(|e| CameraError::driver("serializing camera", e))?;
                println!("{line}");
            }
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&cameras)
                .map_err(|e| CameraError::driver("serializing cameras", e))?;
            println!("{json}");
        },
    }

    Ok(())
}

fn run_orientations(options: &Options) -> Result<(), CameraError> {
    for token in &options.orientations {
        let orientation = Orientation::decode(token)?;
        println!("{orientation}");
    }
    Ok(())
}

fn describe(camera: &DeviceRecord) -> String {
    let mut line = if camera.name == camera.camera_id {
        camera.camera_id.clone()
    } else {
        format!("{}: {}", camera.camera_id, camera.name)
    };
    if let Some(facing) = camera.lens_facing {
        line.push_str(&format!(" [{facing}]"));
    }
    if let Some(degrees) = camera.sensor_orientation {
        line.push_str(&format!(" {degrees}°"));
    }
    if let Some(mm) = camera.focal_length {
        line.push_str(&format!(" {mm}mm"));
    }
    line
}
