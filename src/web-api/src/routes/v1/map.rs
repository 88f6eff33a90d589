use actix_web::web;
use pickleplay_core::{CourtsQuery, MapView, discover};
use serde_qs::actix::QsQuery as Query;

use crate::{
    ApiState, Dataset, error::Result, response::Response, routes::utils,
    routes::v1::court::CourtsParams,
};

/// Returns the map view model for the courts matching the given filters.
/// Without a configured maps api key the map stays in its loading state.
#[tracing::instrument(skip(db, state))]
pub async fn map<T: Dataset>(
    db: web::Data<T>,
    state: web::Data<ApiState>,
    params: Query<CourtsParams>,
) -> Result<Response<MapView>> {
    let params = params.into_inner();
    let location = utils::location(params.lat, params.lng)?;
    let selected = params.selected.clone();
    let query = CourtsQuery::from(params);

    let listing = discover(db.courts(), &query, &location, &state.options);
    let view = MapView::build(&state.map, &location, &listing, selected.as_ref())?;

    Ok(Response::new(view))
}
