use tracing::{debug, instrument};

use crate::api::{self, build_url};
use crate::error::Result;
use crate::model::MatchList;

#[instrument(skip(client))]
pub(crate) async fn get_matchlist(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    season_id: Option<i64>,
) -> Result<MatchList> {
    let url = build_url(base_url, path, season_id);
    let matches: MatchList = api::get_json(client, &url).await?;
    debug!(count = matches.len(), season_id, "fetched match list");
    Ok(matches)
}
