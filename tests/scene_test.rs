//! Scene files end to end: YAML on disk to pixels to PNG.
//!
//! Run: cargo test --test scene_test

#![allow(clippy::unwrap_used)]

use std::io::Write;

use line_raster::prelude::*;
use line_raster::scene::PolylineSpec;

const TRIANGLE_SCENE: &str = r##"
width: 32
height: 24
background: "#000000"
segments:
  - from: [0, 23]
    to: [31, 23]
    color: "#00FF00"
polylines:
  - points: [[4, 4], [27, 4], [16, 20]]
    closed: true
    color: "#FF0000"
"##;

fn scene_file(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn load_and_render_scene() {
    let file = scene_file(TRIANGLE_SCENE);
    let scene = Scene::load(file.path()).unwrap();

    let (buffer, reports) = scene.render().unwrap();

    assert_eq!((buffer.width(), buffer.height()), (32, 24));
    assert_eq!(buffer.read(0, 23), Ok(Color::GREEN));
    assert_eq!(buffer.read(4, 4), Ok(Color::RED));
    assert_eq!(buffer.read(16, 20), Ok(Color::RED));
    assert_eq!(buffer.read(16, 12), Ok(Color::BLACK));

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|item| item.report.is_complete()));
    assert_eq!(reports[1].label, "polyline 0");
}

#[test]
fn missing_scene_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Scene::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::SceneNotFound(_)));
}

#[test]
fn malformed_scene_file() {
    let file = scene_file("segments:\n  - from: [0, 0]\n    to: nowhere\n");
    let err = Scene::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::SceneParse { .. }), "got {err:?}");
}

#[test]
fn cli_style_overrides_win() {
    let file = scene_file(TRIANGLE_SCENE);
    let mut scene = Scene::load(file.path()).unwrap().with_dimensions(Some(8), None);
    scene.background = Color::WHITE;

    let (buffer, reports) = scene.render().unwrap();

    assert_eq!((buffer.width(), buffer.height()), (8, 24));
    assert_eq!(buffer.read(0, 0), Ok(Color::WHITE));
    assert!(!reports[0].report.is_complete());
}

#[test]
fn invalid_polyline_fails_render() {
    let mut scene = Scene::new();
    scene.polylines.push(PolylineSpec {
        points: vec![Point::new(0, 0), Point::new(5, 5)],
        closed: true,
        color: Color::RED,
    });

    assert!(matches!(
        scene.render(),
        Err(Error::NotEnoughPoints { required: 3, actual: 2 })
    ));
}

#[test]
fn rendered_scene_writes_png() {
    let file = scene_file(TRIANGLE_SCENE);
    let (buffer, _) = Scene::load(file.path()).unwrap().render().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.png");
    PngEncoder::write_to_file(&buffer, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(bytes, PngEncoder::to_bytes(&buffer).unwrap());
}
