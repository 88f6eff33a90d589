use std::{io::Error, net::TcpListener};

use actix_web::{
    HttpServer,
    dev::Server,
    middleware::{Compress, Condition},
    web::{self, Data},
};
use pickleplay_core::BundledCourts;
use tracing_actix_web::TracingLogger;

use crate::{
    ApiState, Dataset, routes,
    settings::{Environment, Settings},
};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub fn build(settings: &Settings) -> Result<Self, Error> {
        Self::build_with(BundledCourts, settings)
    }

    pub fn build_with<T: Dataset + Clone>(dataset: T, settings: &Settings) -> Result<Self, Error> {
        let listener = TcpListener::bind(settings.api.listener_address())?;
        let port = listener.local_addr()?.port();

        let server = create_server(dataset, listener, settings)?;

        Ok(App { server, port })
    }

    pub async fn run(self) -> Result<(), Error> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn create_server<T>(dataset: T, listener: TcpListener, settings: &Settings) -> Result<Server, Error>
where
    T: Dataset + Clone,
{
    let not_prod = settings.environment != Environment::Production;
    let state = ApiState {
        options: settings.discovery_options(),
        map: settings.map_settings(),
    };

    let mut server = HttpServer::new(move || {
        let scope = web::scope("/v1.0")
            .route("/courts", web::get().to(routes::v1::court::courts::<T>))
            .route(
                "/courts/{court_id}",
                web::get().to(routes::v1::court::court::<T>),
            )
            .route(
                "/courts/{court_id}/directions",
                web::get().to(routes::v1::court::directions::<T>),
            )
            .route("/map", web::get().to(routes::v1::map::map::<T>));

        actix_web::App::new()
            .app_data(Data::new(dataset.clone()))
            .app_data(Data::new(state.clone()))
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, actix_cors::Cors::permissive()))
            .wrap(TracingLogger::default())
            .service(scope)
    })
    .listen(listener)?;

    if let Some(workers) = settings.api.num_workers {
        server = server.workers(workers as usize);
    }
    if let Some(timeout) = settings.api.shutdown_timeout {
        server = server.shutdown_timeout(timeout.as_secs());
    }

    Ok(server.run())
}
