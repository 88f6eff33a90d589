use pickleplay_core::{CourtId, CourtSorting, LocationState};
use reqwest::StatusCode;
use web_api::{
    error::ErrorDiscriminants,
    routes::v1::court::{CourtsParams, LocationParams},
};

use super::helper::test;

const RIZAL_PARK: (f64, f64) = (14.5995, 120.9842);

fn ids(courts: &[web_api::routes::v1::court::Court]) -> Vec<&str> {
    courts.iter().map(|c| c.id.as_ref()).collect()
}

#[tokio::test]
async fn test_courts_returns_all_courts_in_dataset_order_without_filters() {
    test(|helper| async move {
        let listing = helper.app.get_courts(CourtsParams::default()).await.unwrap();

        assert_eq!(listing.courts.len(), 12);
        assert_eq!(listing.courts[0].id.as_ref(), "makati-pickleball-hub");
        assert_eq!(listing.sorting, None);
        assert_eq!(listing.location, LocationState::Unknown);
        assert!(listing.courts.iter().all(|c| c.distance.is_none()));
    })
    .await;
}

#[tokio::test]
async fn test_courts_sorts_by_rating_with_unrated_last() {
    test(|helper| async move {
        let params = CourtsParams {
            sorting: Some(CourtSorting::Rating),
            ..Default::default()
        };

        let listing = helper.app.get_courts(params).await.unwrap();

        assert_eq!(listing.sorting, Some(CourtSorting::Rating));
        assert_eq!(
            ids(&listing.courts[..3]),
            vec![
                "tagaytay-ridge-courts",
                "makati-pickleball-hub",
                "bgc-active-courts"
            ]
        );
        assert_eq!(
            listing.courts.last().unwrap().id.as_ref(),
            "greenhills-pickleball-courts"
        );
    })
    .await;
}

#[tokio::test]
async fn test_courts_filters_by_search_case_insensitively() {
    test(|helper| async move {
        let params = CourtsParams {
            search: Some("  TAGUIG ".into()),
            ..Default::default()
        };

        let listing = helper.app.get_courts(params).await.unwrap();

        assert_eq!(ids(&listing.courts), vec!["bgc-active-courts"]);
    })
    .await;
}

#[tokio::test]
async fn test_courts_combines_region_amenity_and_rating_filters() {
    test(|helper| async move {
        let params = CourtsParams {
            regions: Some(vec!["Metro Manila".into()]),
            amenities: Some(vec!["Lights".into(), "Parking".into()]),
            min_rating: Some(4.5),
            ..Default::default()
        };

        let listing = helper.app.get_courts(params).await.unwrap();

        assert_eq!(
            ids(&listing.courts),
            vec![
                "makati-pickleball-hub",
                "bgc-active-courts",
                "alabang-pickleball-club"
            ]
        );
    })
    .await;
}

#[tokio::test]
async fn test_courts_nearby_keeps_courts_within_radius() {
    test(|helper| async move {
        let params = CourtsParams {
            nearby: Some(true),
            lat: Some(RIZAL_PARK.0),
            lng: Some(RIZAL_PARK.1),
            sorting: Some(CourtSorting::Distance),
            ..Default::default()
        };

        let listing = helper.app.get_courts(params).await.unwrap();

        assert_eq!(listing.courts.len(), 10);
        assert_eq!(listing.sorting, Some(CourtSorting::Distance));
        assert_eq!(
            listing.courts[0].id.as_ref(),
            "rizal-park-pickleball-courts"
        );
        assert!(
            listing
                .courts
                .windows(2)
                .all(|w| w[0].distance.unwrap() <= w[1].distance.unwrap())
        );
        assert!(listing.courts.iter().all(|c| c.distance.unwrap() <= 50.0));
        assert!(listing.location.is_known());
    })
    .await;
}

#[tokio::test]
async fn test_courts_nearby_without_location_is_ignored() {
    test(|helper| async move {
        let params = CourtsParams {
            nearby: Some(true),
            ..Default::default()
        };

        let listing = helper.app.get_courts(params).await.unwrap();

        assert_eq!(listing.courts.len(), 12);
    })
    .await;
}

#[tokio::test]
async fn test_courts_distance_sort_without_location_keeps_dataset_order() {
    test(|helper| async move {
        let all = helper.app.get_courts(CourtsParams::default()).await.unwrap();
        let params = CourtsParams {
            sorting: Some(CourtSorting::Distance),
            ..Default::default()
        };

        let listing = helper.app.get_courts(params).await.unwrap();

        assert_eq!(listing.sorting, None);
        assert_eq!(ids(&listing.courts), ids(&all.courts));
    })
    .await;
}

#[tokio::test]
async fn test_courts_with_no_matches_returns_empty_listing() {
    test(|helper| async move {
        let params = CourtsParams {
            search: Some("cebu".into()),
            ..Default::default()
        };

        let listing = helper.app.get_courts(params).await.unwrap();

        assert!(listing.courts.is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_courts_rejects_partial_location() {
    test(|helper| async move {
        let params = CourtsParams {
            lat: Some(RIZAL_PARK.0),
            ..Default::default()
        };

        let error = helper.app.get_courts(params).await.unwrap_err();

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, ErrorDiscriminants::MissingCoordinate);
    })
    .await;
}

#[tokio::test]
async fn test_courts_rejects_out_of_range_location() {
    test(|helper| async move {
        let params = CourtsParams {
            lat: Some(95.0),
            lng: Some(RIZAL_PARK.1),
            ..Default::default()
        };

        let error = helper.app.get_courts(params).await.unwrap_err();

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, ErrorDiscriminants::InvalidCoordinate);
    })
    .await;
}

#[tokio::test]
async fn test_courts_rejects_unknown_sorting() {
    test(|helper| async move {
        let response = helper.app.get_raw("courts?sorting=alphabetical").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    })
    .await;
}

#[tokio::test]
async fn test_court_returns_details_with_links() {
    test(|helper| async move {
        let id = CourtId::from("makati-pickleball-hub");

        let court = helper
            .app
            .get_court(&id, LocationParams::default())
            .await
            .unwrap();

        assert_eq!(court.court.id, id);
        assert_eq!(court.court.review_count, 157);
        assert_eq!(court.rating_breakdown.unwrap().total(), 157);
        assert_eq!(court.links.details, "/courts/makati-pickleball-hub");
        assert_eq!(
            court.links.directions,
            "https://www.google.com/maps/dir/?api=1&destination=14.5547,121.0244"
        );
        assert!(
            court
                .links
                .search
                .starts_with("https://www.google.com/maps/search/?api=1&query=")
        );
    })
    .await;
}

#[tokio::test]
async fn test_court_without_rating_has_no_breakdown() {
    test(|helper| async move {
        let id = CourtId::from("greenhills-pickleball-courts");

        let court = helper
            .app
            .get_court(&id, LocationParams::default())
            .await
            .unwrap();

        assert_eq!(court.court.rating, None);
        assert_eq!(court.court.review_count, 0);
        assert_eq!(court.rating_breakdown, None);
    })
    .await;
}

#[tokio::test]
async fn test_court_returns_not_found_for_unknown_id() {
    test(|helper| async move {
        let error = helper
            .app
            .get_court(&CourtId::from("does-not-exist"), LocationParams::default())
            .await
            .unwrap_err();

        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.error, ErrorDiscriminants::CourtNotFound);
    })
    .await;
}

#[tokio::test]
async fn test_directions_include_origin_when_location_is_known() {
    test(|helper| async move {
        let id = CourtId::from("makati-pickleball-hub");
        let params = LocationParams {
            lat: Some(RIZAL_PARK.0),
            lng: Some(RIZAL_PARK.1),
        };

        let directions = helper.app.get_directions(&id, params).await.unwrap();

        assert_eq!(directions.court_id, id);
        assert_eq!(
            directions.url,
            "https://www.google.com/maps/dir/?api=1&origin=14.5995,120.9842&destination=14.5547,121.0244"
        );
        let distance = directions.distance.unwrap();
        assert!((distance - 6.6).abs() < 0.1);
    })
    .await;
}

#[tokio::test]
async fn test_directions_without_location_omit_origin() {
    test(|helper| async move {
        let id = CourtId::from("bgc-active-courts");

        let directions = helper
            .app
            .get_directions(&id, LocationParams::default())
            .await
            .unwrap();

        assert_eq!(directions.distance, None);
        assert_eq!(
            directions.url,
            "https://www.google.com/maps/dir/?api=1&destination=14.5509,121.0503"
        );
    })
    .await;
}
