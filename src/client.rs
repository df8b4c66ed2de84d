use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::*;

/// Paths of the API endpoints, relative to the base URL.
///
/// `{matchId}` and `{playerId}` are substituted per request; season-scoped
/// requests get a `seasonId` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub upcoming_matches: String,
    pub passed_matches: String,
    pub season_matches: String,
    pub match_history: String,
    pub registration_history: String,
    pub player_stats: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            upcoming_matches: "/api/matches/me/upcoming".to_string(),
            passed_matches: "/api/matches/me/passed".to_string(),
            season_matches: "/api/matches/admin/all".to_string(),
            match_history: "/api/matches/{matchId}/history".to_string(),
            registration_history: "/api/registrations/match/{matchId}/history".to_string(),
            player_stats: "/api/players/{playerId}/stats".to_string(),
        }
    }
}

/// Client for the schedule API.
///
/// Authentication is left to the caller: build a [`reqwest::Client`] with the
/// session's default headers and hand it to [`ScheduleClient::with_client`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hockey_schedule::Result<()> {
/// use hockey_schedule::{
///     classify_all, filter_and_count, now_local, AdminMatchFilter, ScheduleClient,
/// };
///
/// let client = ScheduleClient::new("https://hockey.example.org");
/// let matches = client.get_season_matches(Some(4)).await?;
/// let classified = classify_all(&matches, now_local());
/// let outcome = filter_and_count(&classified, AdminMatchFilter::FirstUpcoming);
/// println!("{} upcoming", outcome.counts.get(AdminMatchFilter::Future));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
    endpoints: Endpoints,
}

impl ScheduleClient {
    /// Create a new client with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
            endpoints: Endpoints::default(),
        }
    }

    /// Override the endpoint paths.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The signed-in player's upcoming matches.
    #[instrument(skip(self))]
    pub async fn get_upcoming_matches(&self, season_id: Option<i64>) -> Result<MatchList> {
        api::matches::get_matchlist(
            &self.http,
            &self.base_url,
            &self.endpoints.upcoming_matches,
            season_id,
        )
        .await
    }

    /// The signed-in player's past matches.
    #[instrument(skip(self))]
    pub async fn get_passed_matches(&self, season_id: Option<i64>) -> Result<MatchList> {
        api::matches::get_matchlist(
            &self.http,
            &self.base_url,
            &self.endpoints.passed_matches,
            season_id,
        )
        .await
    }

    /// Every match of a season, without player context.
    #[instrument(skip(self))]
    pub async fn get_season_matches(&self, season_id: Option<i64>) -> Result<MatchList> {
        api::matches::get_matchlist(
            &self.http,
            &self.base_url,
            &self.endpoints.season_matches,
            season_id,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_match_history(&self, match_id: i64) -> Result<Vec<MatchHistoryEntry>> {
        api::history::get_history(
            &self.http,
            &self.base_url,
            &self.endpoints.match_history,
            match_id,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_registration_history(
        &self,
        match_id: i64,
    ) -> Result<Vec<RegistrationHistoryEntry>> {
        api::history::get_history(
            &self.http,
            &self.base_url,
            &self.endpoints.registration_history,
            match_id,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_player_stats(
        &self,
        player_id: i64,
        season_id: Option<i64>,
    ) -> Result<PlayerStatsTotals> {
        api::stats::get_player_stats(
            &self.http,
            &self.base_url,
            &self.endpoints.player_stats,
            player_id,
            season_id,
        )
        .await
    }
}
