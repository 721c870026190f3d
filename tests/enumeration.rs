// This is free and unencumbered software released into the public domain.

use asimov_camera_catalog::shared::{
    CameraError, Characteristics, DeviceEnumerator, DeviceManager, DriverResult, LensFacing,
    Orientation,
};
use serde_json::json;
use std::{borrow::Cow, collections::HashMap};

/// A device manager that replays scripted answers.
#[derive(Default)]
struct ScriptedManager {
    ids: Option<Vec<&'static str>>,
    cameras: HashMap<&'static str, Characteristics>,
}

impl ScriptedManager {
    fn listing(ids: &[&'static str]) -> Self {
        Self {
            ids: Some(ids.to_vec()),
            ..Default::default()
        }
    }

    fn camera(mut self, id: &'static str, characteristics: Characteristics) -> Self {
        self.cameras.insert(id, characteristics);
        self
    }
}

impl dogma::Named for ScriptedManager {
    fn name(&self) -> Cow<'_, str> {
        "scripted".into()
    }
}

impl DeviceManager for ScriptedManager {
    fn camera_ids(&self) -> DriverResult<Vec<String>> {
        match &self.ids {
            Some(ids) => Ok(ids.iter().map(|s| s.to_string()).collect()),
            None => Err("camera service is not running".into()),
        }
    }

    fn characteristics(&self, camera_id: &str) -> DriverResult<Characteristics> {
        self.cameras
            .get(camera_id)
            .cloned()
            .ok_or_else(|| format!("camera {camera_id} disappeared").into())
    }
}

#[test]
fn orientation_tokens_round_trip() {
    for o in Orientation::ALL {
        assert_eq!(o.encode().parse::<Orientation>().unwrap(), o);
    }
}

#[test]
fn orientation_decode_is_exact() {
    for bad in ["PortraitUp", "portraitup ", "", "upside down"] {
        assert!(matches!(
            Orientation::decode(bad),
            Err(CameraError::UnrecognizedOrientation(_))
        ));
    }
}

#[test]
fn failing_camera_is_skipped() {
    let manager = ScriptedManager::listing(&["0", "1"]).camera(
        "0",
        Characteristics::new()
            .with_sensor_orientation(90)
            .with_lens_facing(0)
            .with_focal_lengths(vec![4.2]),
    );

    let records = DeviceEnumerator::new(manager).list_devices().unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.camera_id, "0");
    assert_eq!(record.sensor_orientation, Some(90));
    assert_eq!(record.lens_facing, Some(LensFacing::Front));
    assert_eq!(record.focal_length, Some(4.2));
}

#[test]
fn missing_characteristics_are_omitted() {
    let manager = ScriptedManager::listing(&["0"]).camera("0", Characteristics::new());

    let records = DeviceEnumerator::new(manager).list_devices().unwrap();
    let map = records[0].to_map().unwrap();
    assert_eq!(
        serde_json::Value::Object(map),
        json!({ "cameraId": "0", "name": "0" })
    );
}

#[test]
fn listing_failure_returns_no_records() {
    let manager = ScriptedManager::default();

    match DeviceEnumerator::new(manager).list_devices() {
        Err(CameraError::ServiceUnavailable { .. }) => {},
        other => panic!("expected ServiceUnavailable, got {other:?}"),
    }
}

#[test]
fn unmatched_lens_facing_is_unknown() {
    let manager = ScriptedManager::listing(&["0"])
        .camera("0", Characteristics::new().with_lens_facing(7));

    let records = DeviceEnumerator::new(manager).list_devices().unwrap();
    assert_eq!(records[0].lens_facing, Some(LensFacing::Unknown));
    assert_eq!(records[0].to_map().unwrap()["lensFacing"], json!("unknown"));
}

#[test]
fn platform_order_is_preserved() {
    let manager = ScriptedManager::listing(&["2", "0", "1"])
        .camera("0", Characteristics::new())
        .camera("1", Characteristics::new())
        .camera("2", Characteristics::new());

    let ids: Vec<_> = DeviceEnumerator::new(manager)
        .list_devices()
        .unwrap()
        .into_iter()
        .map(|r| r.camera_id)
        .collect();
    assert_eq!(ids, ["2", "0", "1"]);
}

#[test]
fn each_call_queries_afresh() {
    let enumerator = DeviceEnumerator::new(
        ScriptedManager::listing(&["0", "1"]).camera("1", Characteristics::new()),
    );

    let first = enumerator.enumerate().unwrap();
    let second = enumerator.enumerate().unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(second.failures.len(), 1);
    assert_eq!(second.failures[0].camera_id, "0");
}

#[test]
fn records_serialize_as_a_flat_array() {
    let manager = ScriptedManager::listing(&["back", "front"])
        .camera(
            "back",
            Characteristics::new()
                .with_lens_facing(1)
                .with_sensor_orientation(270),
        )
        .camera(
            "front",
            Characteristics::new()
                .with_name("Selfie")
                .with_lens_facing(0)
                .with_focal_lengths(vec![2.5, 3.0]),
        );

    let records = DeviceEnumerator::new(manager).list_devices().unwrap();
    let value = serde_json::to_value(&records).unwrap();
    assert_eq!(
        value,
        json!([
            { "cameraId": "back", "name": "back", "sensorOrientation": 270, "lensFacing": "back" },
            { "cameraId": "front", "name": "Selfie", "lensFacing": "front", "focalLength": 2.5 },
        ])
    );
}
