mod service;
mod types;

pub use service::{FILE_FIELD, HEALTH_PATH, PREDICT_PATH, PredictionService};
pub use types::{HEATMAP_DATA_URI_PREFIX, HealthStatus, PredictionResult};
