//! Demo catalog used when the asset service is unreachable.

use crate::asset::{ModelAsset, StorageInfo};

/// Ids of the demo assets, in catalog order.
pub const DEMO_ASSET_IDS: [&str; 4] = ["demo-iris", "demo-sentinel", "demo-atlas", "demo-forge"];

fn template(id: &str, name: &str) -> ModelAsset {
    ModelAsset {
        version: "1.0.0".to_string(),
        description: "Demo model asset for offline benchmarking".to_string(),
        owner: Some("benchboard".to_string()),
        frameworks: vec!["PyTorch".to_string()],
        libraries: vec!["scikit-learn".to_string()],
        algorithms: vec!["Neural Network".to_string()],
        storage: StorageInfo {
            uri: None,
            content_type: Some("application/octet-stream".to_string()),
            size_bytes: Some(0),
        },
        ..ModelAsset::new(id, name)
    }
}

/// The fixed four-asset fallback catalog. Same assets, same order, every call.
pub fn demo_catalog() -> Vec<ModelAsset> {
    vec![
        ModelAsset {
            algorithms: vec!["Gradient Boosting".to_string()],
            ..template(DEMO_ASSET_IDS[0], "Iris-V2")
        },
        ModelAsset {
            frameworks: vec!["TensorFlow Lite".to_string()],
            ..template(DEMO_ASSET_IDS[1], "Sentinel-Edge")
        },
        ModelAsset {
            libraries: vec!["ONNX Runtime".to_string()],
            ..template(DEMO_ASSET_IDS[2], "Atlas-Lite")
        },
        ModelAsset {
            algorithms: vec!["Transformer".to_string()],
            ..template(DEMO_ASSET_IDS[3], "Forge-XL")
        },
    ]
}
