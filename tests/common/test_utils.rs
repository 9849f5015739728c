use cardamom_client::{image::ImageSource, transport::RawResponse};
use serde_json::{Value, json};

/// Base64 of the 8-byte PNG signature; enough to stand in for a heatmap.
pub const SAMPLE_HEATMAP: &str = "iVBORw0KGgo=";

/// Every class name the inference service emits.
pub const SERVICE_CLASS_NAMES: [&str; 3] =
    ["Colletotrichum Blight", "Phyllosticta Leaf Spot", "Healthy"];

/// Create a small JPEG-typed image source
pub fn create_test_image() -> ImageSource {
    ImageSource::from_bytes(
        vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10],
        "image/jpeg",
        Some("file:///storage/emulated/0/DCIM/leaf.jpg".to_string()),
    )
}

pub fn prediction_body(class_name: &str, confidence: f64) -> Value {
    json!({
        "class_name": class_name,
        "confidence": confidence,
        "heatmap": SAMPLE_HEATMAP,
    })
}

pub fn ok_response(body: Value) -> RawResponse {
    RawResponse::new(200, "OK", body.to_string())
}

pub fn error_response(status: u16, status_text: &str, body: &str) -> RawResponse {
    RawResponse::new(status, status_text, body)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
api:
  base_url: "http://127.0.0.1:8000"
logs:
  level: "debug"
  json: false
"#;
