use tracing::{debug, instrument};

use crate::api::{self, build_url, fill};
use crate::error::Result;
use crate::model::PlayerStatsTotals;

#[instrument(skip(client))]
pub(crate) async fn get_player_stats(
    client: &reqwest::Client,
    base_url: &str,
    template: &str,
    player_id: i64,
    season_id: Option<i64>,
) -> Result<PlayerStatsTotals> {
    let url = build_url(base_url, &fill(template, "playerId", player_id), season_id);
    let stats: PlayerStatsTotals = api::get_json(client, &url).await?;
    debug!(player_id, season_id, "fetched player stats");
    Ok(stats)
}
