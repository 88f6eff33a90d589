use std::{future::Future, sync::Once};

use pickleplay_core::{BundledCourts, DEFAULT_CENTER};
use tracing_subscriber::FmtSubscriber;
use web_api::{
    settings::{
        ApiSettings, DiscoverySettings, Environment, LogLevel, MapsSettings, Settings,
    },
    startup::App,
};

use super::test_client::ApiClient;

static TRACING: Once = Once::new();

pub struct TestHelper {
    pub app: ApiClient,
}

impl TestHelper {
    async fn spawn_app(app: App) -> TestHelper {
        let address = format!("http://127.0.0.1:{}/v1.0", app.port());

        tokio::spawn(async { app.run().await.unwrap() });

        TestHelper {
            app: ApiClient::new(address),
        }
    }
}

pub fn test_settings(api_key: Option<&str>) -> Settings {
    Settings {
        log_level: LogLevel::Debug,
        environment: Environment::Test,
        api: ApiSettings {
            ip: "127.0.0.1".to_string(),
            port: 0,
            num_workers: Some(1),
            shutdown_timeout: None,
        },
        discovery: DiscoverySettings {
            nearby_radius_km: 50.0,
            default_center: DEFAULT_CENTER,
        },
        maps: MapsSettings {
            base_url: "https://www.google.com/maps".to_string(),
            api_key: api_key.map(String::from),
            user_zoom: 13,
            default_zoom: 11,
        },
    }
}

pub async fn test<T, Fut>(test: T)
where
    T: FnOnce(TestHelper) -> Fut,
    Fut: Future<Output = ()>,
{
    test_with_settings(test_settings(Some("test-key")), test).await
}

pub async fn test_with_settings<T, Fut>(settings: Settings, test: T)
where
    T: FnOnce(TestHelper) -> Fut,
    Fut: Future<Output = ()>,
{
    TRACING.call_once(|| {
        tracing::subscriber::set_global_default(
            FmtSubscriber::builder()
                .with_max_level(tracing::Level::INFO)
                .finish(),
        )
        .unwrap();
    });

    let app = App::build_with(BundledCourts, &settings).unwrap();
    let helper = TestHelper::spawn_app(app).await;

    test(helper).await;
}
