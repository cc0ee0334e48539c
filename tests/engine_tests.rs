use axum::response::IntoResponse;
use chrono::{Duration, Utc};
use http::StatusCode;
use uuid::Uuid;

use asset_tracking::dto::asset_dto::AssetExportData;
use asset_tracking::models::asset::Asset;
use asset_tracking::models::filter::AssetFilter;
use asset_tracking::models::location::LocationData;
use asset_tracking::services::asset_retrieval_service::{
    compose_asset_data_response, compose_history_response, ensure_non_empty_export,
};
use asset_tracking::utils::errors::AppError;
use asset_tracking::utils::geo::{centroid, Point};

fn sample_asset(latitude: f64, longitude: f64) -> Asset {
    let now = Utc::now();
    Asset {
        id: Uuid::new_v4(),
        name: "KA-05-MM-9999".to_string(),
        description: "Field salesperson".to_string(),
        asset_type: "SALESPERSON".to_string(),
        latitude,
        longitude,
        last_reported_at: now,
        created_at: now,
        updated_at: now,
    }
}

fn sample_location(asset_id: Uuid, latitude: f64, longitude: f64, age_hours: i64) -> LocationData {
    let now = Utc::now();
    LocationData {
        id: Uuid::new_v4(),
        asset_id,
        latitude,
        longitude,
        recorded_at: now - Duration::hours(age_hours),
        created_at: now,
    }
}

#[test]
fn classification_is_total_and_exclusive() {
    let types = [None, Some("".to_string()), Some("TRUCK".to_string())];
    let bounds = [None, Some(1000_i64)];

    for asset_type in &types {
        for start in &bounds {
            for end in &bounds {
                let result = AssetFilter::classify(asset_type.clone(), *start, *end);
                // con start <= end toda combinación cae en exactamente un modo
                let filter = result.expect("classification should be total for valid ranges");

                let has_type = matches!(asset_type.as_deref(), Some(t) if !t.trim().is_empty());
                let has_time = start.is_some() && end.is_some();

                match filter {
                    AssetFilter::None => assert!(!has_type && !has_time),
                    AssetFilter::ByType(_) => assert!(has_type && !has_time),
                    AssetFilter::ByTime(_, _) => assert!(!has_type && has_time),
                    AssetFilter::ByTypeAndTime(_, _, _) => assert!(has_type && has_time),
                }
            }
        }
    }
}

#[test]
fn inverted_time_range_fails_regardless_of_type() {
    for asset_type in [None, Some("TRUCK".to_string())] {
        let err = AssetFilter::classify(asset_type, Some(1000), Some(500)).unwrap_err();
        match err {
            AppError::InvalidFilter { start, end } => {
                assert_eq!(start, 1000);
                assert_eq!(end, 500);
            }
            other => panic!("expected InvalidFilter, got {:?}", other),
        }
    }
}

#[test]
fn no_filters_example_from_api_contract() {
    // type="", start y end ausentes -> modo sin filtros
    let filter = AssetFilter::classify(Some("".to_string()), None, None).unwrap();
    assert_eq!(filter, AssetFilter::None);
}

#[test]
fn centroid_of_single_position_is_that_position() {
    let p = Point::new(48.8566, 2.3522);
    assert_eq!(centroid(&[p]).unwrap(), p);
}

#[test]
fn centroid_of_equal_positions_is_that_position() {
    let p = Point::new(48.75, 2.25);
    assert_eq!(centroid(&vec![p; 7]).unwrap(), p);
}

#[test]
fn history_without_records_falls_back_to_last_reported_position() {
    let asset = sample_asset(19.076, 72.8777);
    let response = compose_history_response(asset, vec![]).unwrap();

    assert!(response.history.is_empty());
    assert_eq!(response.centroid, Point::new(19.076, 72.8777));
}

#[test]
fn history_with_records_uses_their_mean_not_the_asset_position() {
    let asset = sample_asset(0.0, 0.0);
    let history = vec![
        sample_location(asset.id, 10.0, 10.0, 1),
        sample_location(asset.id, 30.0, 30.0, 3),
    ];

    let response = compose_history_response(asset, history).unwrap();

    assert_eq!(response.history.len(), 2);
    assert!((response.centroid.latitude - 20.0).abs() < f64::EPSILON);
    assert!((response.centroid.longitude - 20.0).abs() < f64::EPSILON);
}

#[test]
fn empty_result_set_centroid_is_origin() {
    let response = compose_asset_data_response(vec![]).unwrap();
    assert_eq!(response.centroid, Point::new(0.0, 0.0));
    assert!(response.assets.is_empty());
}

#[test]
fn export_with_zero_rows_returns_exactly_one_sentinel() {
    let rows = ensure_non_empty_export(vec![]);
    assert_eq!(rows.len(), 1);

    let sentinel = &rows[0];
    assert!(sentinel.asset_id.is_none());
    assert!(sentinel.name.is_none());
    assert!(sentinel.asset_type.is_none());
    assert!(sentinel.latitude.is_none());
    assert!(sentinel.longitude.is_none());
    assert!(sentinel.recorded_at.is_none());
}

#[test]
fn export_with_k_rows_returns_k_rows() {
    let row = AssetExportData {
        asset_id: Some(Uuid::new_v4()),
        name: Some("KA-05-MM-9999".to_string()),
        asset_type: Some("TRUCK".to_string()),
        latitude: Some(19.0),
        longitude: Some(72.8),
        recorded_at: Some(Utc::now()),
    };

    let rows = ensure_non_empty_export(vec![row.clone(), row.clone(), row]);
    assert_eq!(rows.len(), 3);
}

#[test]
fn error_kinds_map_to_expected_status_codes() {
    let cases = [
        (
            AppError::AssetNotFound("Asset not found for id - x".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            AppError::InvalidFilter {
                start: 1000,
                end: 500,
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::EmptyInput("centroid over empty set".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::BadRequest("limit must be at least 1".to_string()),
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn asset_response_serializes_type_field() {
    let asset = sample_asset(1.0, 2.0);
    let response = compose_asset_data_response(vec![asset]).unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["assets"][0]["type"], "SALESPERSON");
    assert!(value["centroid"]["latitude"].is_f64());
    assert!(value["centroid"]["longitude"].is_f64());
}
