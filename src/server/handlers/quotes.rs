use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{Quote, Stop};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    source: Stop,
    destination: Stop,
    distance: String,
    #[serde(default)]
    extra_distance: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api
        .create_quote(
            params.source,
            params.destination,
            params.distance,
            params.extra_distance,
        )
        .await?;

    Ok(quote.into())
}
