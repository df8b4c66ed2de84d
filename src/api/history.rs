use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::api::{self, build_url, fill};
use crate::error::Result;

/// Fetch the history of one match or registration. The API returns entries
/// in no particular order.
#[instrument(skip(client))]
pub(crate) async fn get_history<E: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    template: &str,
    match_id: i64,
) -> Result<Vec<E>> {
    let url = build_url(base_url, &fill(template, "matchId", match_id), None);
    let entries: Vec<E> = api::get_json(client, &url).await?;
    debug!(count = entries.len(), match_id, "fetched history");
    Ok(entries)
}
