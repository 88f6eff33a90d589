use court_service::Error;
use pickleplay_core::{
    AdminCourtsFilter, CourtServiceOutbound, CourtStatistics, CourtStatus, Error as CoreError,
};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::helper::{TestHelper, admin_court};

#[tokio::test]
async fn get_courts_returns_deserialized_courts() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/api/courts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            admin_court("makati-pickleball-hub", "pending"),
            admin_court("bgc-active-courts", "approved"),
        ])))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    let courts = helper.client.get_courts(&Default::default()).await.unwrap();

    assert_eq!(courts.len(), 2);
    assert_eq!(courts[0].id().as_ref(), "makati-pickleball-hub");
    assert_eq!(courts[0].status, CourtStatus::Pending);
    assert_eq!(courts[0].court.rating, Some(4.8));
    assert_eq!(courts[1].status, CourtStatus::Approved);
}

#[tokio::test]
async fn get_courts_sends_filters_as_query() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/api/courts"))
        .and(query_param("status", "pending"))
        .and(query_param("city", "Makati"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([admin_court(
            "makati-pickleball-hub",
            "pending"
        )])))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    let filters = AdminCourtsFilter {
        status: Some(CourtStatus::Pending),
        search: None,
        city: Some("Makati".into()),
    };
    let courts = helper.client.get_courts(&filters).await.unwrap();

    assert_eq!(courts.len(), 1);
}

#[tokio::test]
async fn get_statistics_returns_counts() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/api/courts/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 10,
            "pending": 3,
            "approved": 5,
            "rejected": 1,
            "suspended": 1
        })))
        .mount(&helper.mock_server)
        .await;

    let stats = helper.client.get_statistics().await.unwrap();

    assert_eq!(
        stats,
        CourtStatistics {
            total: 10,
            pending: 3,
            approved: 5,
            rejected: 1,
            suspended: 1,
        }
    );
}

#[tokio::test]
async fn failed_request_keeps_status_and_body() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/api/courts/statistics"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&helper.mock_server)
        .await;

    let err = helper.client.statistics().await.unwrap_err();

    match err {
        Error::FailedRequest { status, body, .. } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "forbidden");
        }
        e => panic!("unexpected error: {e:?}"),
    }
}

#[tokio::test]
async fn server_errors_map_to_core_timeout() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/api/courts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&helper.mock_server)
        .await;

    let err = helper
        .client
        .get_courts(&Default::default())
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn client_errors_map_to_core_unexpected() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/api/courts"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad filter"))
        .mount(&helper.mock_server)
        .await;

    let err = helper
        .client
        .get_courts(&Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Unexpected { .. }));
}

#[tokio::test]
async fn malformed_body_is_a_request_error() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/api/courts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&helper.mock_server)
        .await;

    let err = helper.client.courts(&Default::default()).await.unwrap_err();

    assert!(matches!(err, Error::Request { .. }));
    assert!(!err.is_transient());
}
