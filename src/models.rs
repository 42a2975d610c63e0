use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---- Normalized shapes returned to the caller ----

#[derive(Deserialize, Serialize, Clone)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub image_path: String,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Fixture {
    pub id: i64,
    pub starting_at: String,
    pub venue: Venue,
    pub participants: Vec<Participant>,
    // always empty in this version; kept for shape compatibility
    pub tvstations: Vec<Value>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Venue {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Participant {
    pub name: String,
    pub meta: ParticipantMeta,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct ParticipantMeta {
    pub location: String,
}

// ---- api-sports.io v3 payloads ----

#[derive(Deserialize)]
pub struct UpstreamTeamsPayload {
    pub response: Vec<UpstreamTeamItem>,
}

#[derive(Deserialize)]
pub struct UpstreamTeamItem {
    pub team: UpstreamTeam,
}

#[derive(Deserialize)]
pub struct UpstreamTeam {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Deserialize)]
pub struct UpstreamFixturesPayload {
    pub response: Vec<UpstreamFixtureItem>,
}

#[derive(Deserialize)]
pub struct UpstreamFixtureItem {
    pub fixture: UpstreamFixture,
    pub teams: UpstreamFixtureTeams,
}

#[derive(Deserialize)]
pub struct UpstreamFixture {
    pub id: i64,
    pub date: String,
    pub venue: UpstreamVenue,
}

#[derive(Deserialize)]
pub struct UpstreamVenue {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Deserialize)]
pub struct UpstreamFixtureTeams {
    pub home: UpstreamSide,
    pub away: UpstreamSide,
}

#[derive(Deserialize)]
pub struct UpstreamSide {
    pub name: String,
}
