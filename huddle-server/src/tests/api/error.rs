use crate::ApiError;
use crate::engine::FriendRequestError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Passwords did not match".into(),
        field: Some("confirm_password".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "confirm_password");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "User is not registered".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    // No field key is emitted for non-validation errors
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_self_request_maps_to_403() {
    let error: ApiError = FriendRequestError::SelfRequest {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "SELF_REQUEST");
}

#[tokio::test]
async fn test_rate_limited_maps_to_429() {
    let error: ApiError = FriendRequestError::RateLimited {
        limit: 3,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_business_rejections_map_to_400_with_codes() {
    let cases = [
        (
            FriendRequestError::InvalidTarget {
                email: "ghost@x.com".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            "INVALID_TARGET",
        ),
        (
            FriendRequestError::AlreadyRequested {
                email: "bob@x.com".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            "ALREADY_REQUESTED",
        ),
        (
            FriendRequestError::UnknownSender {
                email: "ghost@x.com".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            "UNKNOWN_SENDER",
        ),
        (
            FriendRequestError::RequestNotFound {
                email: "bob@x.com".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            "REQUEST_NOT_FOUND",
        ),
    ];

    for (engine_error, expected_code) in cases {
        let error: ApiError = engine_error.into();
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"]["code"], expected_code);
    }
}

#[tokio::test]
async fn test_infrastructure_error_hides_details() {
    let error: ApiError = FriendRequestError::Infrastructure {
        message: "connection pool exhausted".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection pool")
    );
}
