use crate::error::ApiError;
use crate::models::{
    Fixture, Participant, ParticipantMeta, Team, UpstreamFixturesPayload, UpstreamTeamsPayload,
    Venue,
};
use crate::state::AppState;

pub const MAX_TEAMS: usize = 5;
pub const MAX_FIXTURES: usize = 3;

// Hardcoded fixture query window for this version.
const SEASON: &str = "2022";
const DATE_FROM: &str = "2023-01-01";
const DATE_TO: &str = "2023-02-01";

// GET {upstream}/teams?search=... and normalize the result.
// A non-success upstream status is forwarded untouched; the body is
// only parsed on success.
pub async fn search_teams(
    state: &AppState,
    api_key: &str,
    search: &str,
) -> Result<Vec<Team>, ApiError> {
    let res = state
        .client
        .get(format!("{}/teams", state.upstream_url))
        .query(&[("search", search)])
        .header("x-apisports-key", api_key)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            details: body,
        });
    }

    let payload: UpstreamTeamsPayload =
        serde_json::from_str(&body).map_err(|_| ApiError::UpstreamMalformed)?;

    Ok(payload
        .response
        .into_iter()
        .take(MAX_TEAMS)
        .map(|item| Team {
            id: item.team.id,
            name: item.team.name,
            // missing logo becomes an empty path
            image_path: item.team.logo.unwrap_or_default(),
        })
        .collect())
}

// GET {upstream}/fixtures for one team over the fixed season/window
// and normalize: one home participant, one away, empty tvstations.
pub async fn team_fixtures(
    state: &AppState,
    api_key: &str,
    team_id: &str,
) -> Result<Vec<Fixture>, ApiError> {
    let res = state
        .client
        .get(format!("{}/fixtures", state.upstream_url))
        .query(&[
            ("team", team_id),
            ("season", SEASON),
            ("from", DATE_FROM),
            ("to", DATE_TO),
        ])
        .header("x-apisports-key", api_key)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            details: body,
        });
    }

    let payload: UpstreamFixturesPayload =
        serde_json::from_str(&body).map_err(|_| ApiError::UpstreamMalformed)?;

    Ok(payload
        .response
        .into_iter()
        .take(MAX_FIXTURES)
        .map(|item| Fixture {
            id: item.fixture.id,
            starting_at: item.fixture.date,
            venue: Venue {
                name: item.fixture.venue.name,
                city: item.fixture.venue.city,
            },
            participants: vec![
                Participant {
                    name: item.teams.home.name,
                    meta: ParticipantMeta {
                        location: "home".to_string(),
                    },
                },
                Participant {
                    name: item.teams.away.name,
                    meta: ParticipantMeta {
                        location: "away".to_string(),
                    },
                },
            ],
            tvstations: Vec::new(),
        })
        .collect())
}
