use pickleplay_core::{CourtId, MapView};
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use web_api::{
    error::{ErrorDiscriminants, ErrorResponse},
    routes::v1::court::{CourtDetails, CourtListing, CourtsParams, Directions, LocationParams},
};

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    pub error: ErrorDiscriminants,
    pub status: StatusCode,
    pub description: String,
}

#[derive(Clone)]
pub struct ApiClient {
    address: String,
    client: Client,
}

impl ApiClient {
    pub fn new(address: String) -> ApiClient {
        ApiClient {
            address,
            client: Client::new(),
        }
    }

    async fn send<S: Serialize, O: DeserializeOwned, R: AsRef<str>>(
        &self,
        path: R,
        url_parameters: Option<S>,
    ) -> Result<O, Error> {
        let response = self
            .client
            .get(self.url_with_params(path.as_ref(), url_parameters))
            .send()
            .await
            .unwrap();

        if response.status().is_success() {
            let text = response.text().await.unwrap();
            match serde_json::from_str::<O>(&text) {
                Ok(v) => Ok(v),
                Err(e) => panic!("failed to deserialize response, err: {e:?}, body: {text}"),
            }
        } else {
            Err(handle_request_failure(response).await)
        }
    }

    fn url_with_params<T: Serialize>(&self, path: &str, parameters: Option<T>) -> String {
        match parameters {
            Some(p) => {
                let params = serde_qs::to_string(&p).unwrap();
                format!("{}/{}?{}", self.address, path, params)
            }
            None => format!("{}/{}", self.address, path),
        }
    }

    pub async fn get_courts(&self, params: CourtsParams) -> Result<CourtListing, Error> {
        self.send("courts", Some(params)).await
    }

    pub async fn get_court(
        &self,
        court_id: &CourtId,
        params: LocationParams,
    ) -> Result<CourtDetails, Error> {
        self.send(format!("courts/{court_id}"), Some(params)).await
    }

    pub async fn get_directions(
        &self,
        court_id: &CourtId,
        params: LocationParams,
    ) -> Result<Directions, Error> {
        self.send(format!("courts/{court_id}/directions"), Some(params))
            .await
    }

    pub async fn get_map(&self, params: CourtsParams) -> Result<MapView, Error> {
        self.send("map", Some(params)).await
    }

    pub async fn get_raw(&self, path_and_query: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/{}", self.address, path_and_query))
            .send()
            .await
            .unwrap()
    }
}

pub async fn handle_request_failure(response: reqwest::Response) -> Error {
    let status = response.status();
    let text = response.text().await.unwrap();
    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(v) => Error {
            error: v.error,
            status,
            description: v.description,
        },
        Err(e) => panic!("failed to deserialize error response, err: {e:?}, body: {text}"),
    }
}
