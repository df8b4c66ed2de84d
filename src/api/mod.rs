pub(crate) mod history;
pub(crate) mod matches;
pub(crate) mod stats;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ScheduleError};

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching");

    let response = client.get(url).send().await.map_err(|e| ScheduleError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScheduleError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| ScheduleError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| ScheduleError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

/// Substitute `{name}` in an endpoint template.
pub(crate) fn fill(template: &str, name: &str, value: i64) -> String {
    template.replace(&format!("{{{name}}}"), &value.to_string())
}

/// Join a base URL and a path, appending the season filter when given.
pub(crate) fn build_url(base_url: &str, path: &str, season_id: Option<i64>) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match season_id {
        Some(season_id) => format!("{base}/{path}?seasonId={season_id}"),
        None => format!("{base}/{path}"),
    }
}
