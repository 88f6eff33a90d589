use std::time::Duration;

use court_service::{CourtServiceClient, Settings};
use serde_json::{Value, json};
use wiremock::MockServer;

pub struct TestHelper {
    pub mock_server: MockServer,
    pub client: CourtServiceClient,
}

impl TestHelper {
    pub async fn new() -> TestHelper {
        let mock_server = MockServer::start().await;
        let settings = Settings {
            url: format!("{}/", mock_server.uri()),
            timeout: Duration::from_secs(2),
            max_retries: 0,
        };
        let client = CourtServiceClient::new(&settings).unwrap();

        TestHelper {
            mock_server,
            client,
        }
    }
}

pub fn admin_court(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": "Makati Pickleball Hub",
        "city": "Makati",
        "address": "Ayala Ave, Makati City",
        "latitude": 14.5547,
        "longitude": 121.0244,
        "rating": 4.8,
        "amenities": ["Lights", "Parking"],
        "status": status,
        "submittedBy": "user-1",
        "createdAt": "2024-05-01T08:00:00Z"
    })
}
