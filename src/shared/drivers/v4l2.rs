// This is free and unencumbered software released into the public domain.

//! Video4Linux cameras discovered through sysfs.
//!
//! Each `videoN` entry under the sysfs root is one camera. The name comes
//! from its `name` attribute; devices attached over USB are reported as
//! external.

use crate::shared::{Characteristics, DeviceManager, DriverResult, LENS_FACING_EXTERNAL};
use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug)]
pub struct V4l2DeviceManager {
    root: PathBuf,
}

impl V4l2DeviceManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl dogma::Named for V4l2DeviceManager {
    fn name(&self) -> Cow<'_, str> {
        "v4l2".into()
    }
}

impl DeviceManager for V4l2DeviceManager {
    fn camera_ids(&self) -> DriverResult<Vec<String>> {
        let rd = fs::read_dir(&self.root)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", self.root.display())))?;

        let mut entries: Vec<u32> = Vec::new();
        for e in rd.flatten() {
            let Some(name) = e.file_name().to_str().map(|s| s.to_string()) else {
                continue;
            };
            if let Some(idx) = parse_video_index(&name) {
                entries.push(idx);
            }
        }

        entries.sort_unstable();
        Ok(entries.into_iter().map(|idx| format!("video{idx}")).collect())
    }

    fn characteristics(&self, camera_id: &str) -> DriverResult<Characteristics> {
        if parse_video_index(camera_id).is_none() {
            return Err(format!("not a video4linux camera id: {camera_id}").into());
        }

        let sys_entry = self.root.join(camera_id);
        let metadata = fs::metadata(&sys_entry)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", sys_entry.display())))?;
        if !metadata.is_dir() {
            return Err(format!("{} is not a directory", sys_entry.display()).into());
        }

        let mut characteristics = Characteristics::new();
        if let Ok(name) = fs::read_to_string(sys_entry.join("name")) {
            let name = name.trim();
            if !name.is_empty() {
                characteristics = characteristics.with_name(name);
            }
        }
        if device_is_usb(&sys_entry) {
            characteristics = characteristics.with_lens_facing(LENS_FACING_EXTERNAL);
        }

        Ok(characteristics)
    }
}

fn parse_video_index(name: &str) -> Option<u32> {
    name.strip_prefix("video")?.parse().ok()
}

fn device_is_usb(sys_entry: &Path) -> bool {
    let device_link = sys_entry.join("device");
    let mut p = match fs::read_link(&device_link) {
        Ok(p) => p,
        Err(_) => return false,
    };

    if !p.is_absolute() {
        p = sys_entry.join(p);
    }

    if let Ok(canon) = p.canonicalize() {
        p = canon;
    }

    let s = p.to_string_lossy();
    s.contains("/usb") || s.contains("\\usb")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::DeviceEnumerator;

    fn add_camera(root: &Path, id: &str, name: Option<&str>) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        if let Some(name) = name {
            fs::write(dir.join("name"), format!("{name}\n")).unwrap();
        }
    }

    #[test]
    fn lists_by_numeric_index() {
        let tmp = tempfile::tempdir().unwrap();
        add_camera(tmp.path(), "video10", None);
        add_camera(tmp.path(), "video2", None);
        add_camera(tmp.path(), "video0", None);
        add_camera(tmp.path(), "v4l-subdev0", None);
        fs::write(tmp.path().join("videoX"), "").unwrap();

        let manager = V4l2DeviceManager::new(tmp.path());
        assert_eq!(
            manager.camera_ids().unwrap(),
            ["video0", "video2", "video10"]
        );
    }

    #[test]
    fn missing_root_fails_listing() {
        let tmp = tempfile::tempdir().unwrap();
        let manager = V4l2DeviceManager::new(tmp.path().join("absent"));
        assert_eq!(manager.root(), tmp.path().join("absent"));
        let err = manager.camera_ids().unwrap_err();
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn name_is_trimmed_and_optional() {
        let tmp = tempfile::tempdir().unwrap();
        add_camera(tmp.path(), "video0", Some("  Integrated Camera "));
        add_camera(tmp.path(), "video1", None);

        let manager = V4l2DeviceManager::new(tmp.path());
        let c0 = manager.characteristics("video0").unwrap();
        assert_eq!(c0.name.as_deref(), Some("Integrated Camera"));
        assert_eq!(c0.lens_facing, None);
        assert_eq!(c0.sensor_orientation, None);
        assert_eq!(c0.focal_lengths, None);

        let c1 = manager.characteristics("video1").unwrap();
        assert_eq!(c1.name, None);
    }

    #[test]
    fn unknown_camera_fails_query() {
        let tmp = tempfile::tempdir().unwrap();
        let manager = V4l2DeviceManager::new(tmp.path());
        assert!(manager.characteristics("video7").is_err());
        assert!(manager.characteristics("../etc").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn usb_devices_are_external() {
        let tmp = tempfile::tempdir().unwrap();
        let usb = tmp.path().join("devices/pci0000:00/usb1/1-1");
        fs::create_dir_all(&usb).unwrap();
        add_camera(tmp.path(), "video0", Some("USB Camera"));
        std::os::unix::fs::symlink(&usb, tmp.path().join("video0/device")).unwrap();

        let manager = V4l2DeviceManager::new(tmp.path());
        let c = manager.characteristics("video0").unwrap();
        assert_eq!(c.lens_facing, Some(LENS_FACING_EXTERNAL));
    }

    #[test]
    fn enumerates_through_sysfs() {
        let tmp = tempfile::tempdir().unwrap();
        add_camera(tmp.path(), "video1", Some("Rear"));
        add_camera(tmp.path(), "video0", None);

        let records = DeviceEnumerator::new(V4l2DeviceManager::new(tmp.path()))
            .list_devices()
            .unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["video0", "Rear"]);
    }
}
