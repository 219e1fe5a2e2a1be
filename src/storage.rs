// Gesture settings persisted in localStorage as JSON
use web_sys::Storage;

use crate::error::StorageError;
use crate::model::GestureSettings;

pub const SETTINGS_KEY: &str = "arv_gesture_settings";

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()?
        .ok_or(StorageError::Unavailable)
}

/// Parses stored settings; missing fields take their defaults.
pub fn parse_settings(raw: &str) -> Result<GestureSettings, StorageError> {
    let settings: GestureSettings = serde_json::from_str(raw)?;
    Ok(settings.sanitized())
}

/// `Ok(None)` when nothing has been saved yet.
pub fn load_settings() -> Result<Option<GestureSettings>, StorageError> {
    match local_storage()?.get_item(SETTINGS_KEY)? {
        Some(raw) => parse_settings(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn save_settings(settings: &GestureSettings) -> Result<(), StorageError> {
    let raw = serde_json::to_string(settings)?;
    local_storage()?.set_item(SETTINGS_KEY, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DistanceMetric, SinglePointerMode};

    #[test]
    fn parse_partial_settings() {
        let s = parse_settings(r#"{"single_pointer":"Rotate","rotate_sensitivity":0.4}"#).unwrap();
        assert_eq!(s.single_pointer, SinglePointerMode::Rotate);
        assert!((s.rotate_sensitivity - 0.4).abs() < 1e-6);
        assert_eq!(s.distance_metric, DistanceMetric::Euclidean);
    }

    #[test]
    fn parse_sanitizes_out_of_range_values() {
        let s = parse_settings(r#"{"pinch_translate_sensitivity":0}"#).unwrap();
        assert_eq!(s.pinch_translate_sensitivity, 0.5);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_settings("{not json").unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
        assert!(err.to_string().starts_with("malformed settings JSON"));
    }

    #[test]
    fn parse_rejects_unknown_axis() {
        assert!(parse_settings(r#"{"rotation_axis":"W"}"#).is_err());
    }
}
