//! Entities serialize to their normalized (flat) shape, and that shape decodes
//! back through the same loose deserializers used for upstream payloads.

use pretty_assertions::assert_eq;
use sd_core::entities::{Agency, Astronaut, Launch, Resource};

#[test]
fn agency_normalized_shape_is_stable() {
    let upstream: Agency = serde_json::from_str(
        r#"{"id": 37, "name": "JAXA", "type": {"name": "Government"},
            "country": [{"alpha_3_code": "JPN"}], "image": {"image_url": "https://x/j.png"}}"#,
    )
    .unwrap();

    let json = serde_json::to_value(&upstream).unwrap();
    assert_eq!(json["type"], "Government");
    assert_eq!(json["country_code"], serde_json::json!(["JPN"]));
    assert_eq!(json["image_url"], "https://x/j.png");

    let again: Agency = serde_json::from_value(json).unwrap();
    assert_eq!(again, upstream);
}

#[test]
fn astronaut_keeps_resolved_image() {
    let mut astronaut: Astronaut =
        serde_json::from_str(r#"{"id": 1, "name": "Jane Doe"}"#).unwrap();
    astronaut.display_image = Some("http://x/y.png".into());

    let again: Astronaut =
        serde_json::from_str(&serde_json::to_string(&astronaut).unwrap()).unwrap();
    assert_eq!(again.image(), Some("http://x/y.png"));
}

#[test]
fn launch_normalized_shape_is_stable() {
    let upstream: Launch = serde_json::from_str(
        r#"{"id": "abc", "name": "Electron | Test", "image": {"image_url": "https://x/e.png"},
            "pad": {"name": "LC-1A", "location": {"name": "Mahia"}},
            "launch_service_provider": {"name": "Rocket Lab", "type": {"name": "Commercial"}}}"#,
    )
    .unwrap();

    let again: Launch =
        serde_json::from_str(&serde_json::to_string(&upstream).unwrap()).unwrap();
    assert_eq!(again, upstream);
    assert_eq!(again.image(), Some("https://x/e.png"));
}
