//! Record types returned by the IGDB catalog API.

use serde::{Deserialize, Serialize};

/// Fields requested from the `games` endpoint, in query order.
pub const GAME_FIELDS: [&str; 12] = [
    "id",
    "first_release_date",
    "franchises",
    "game_modes",
    "genres",
    "involved_companies",
    "keywords",
    "name",
    "platforms",
    "player_perspectives",
    "tags",
    "themes",
];

/// Fields requested from the `genres` endpoint.
pub const GENRE_FIELDS: [&str; 2] = ["id", "name"];

/// A game record.
///
/// ID lists reference other catalog resources (franchises, genres, ...).
/// IGDB omits empty lists and unknown release dates, so those default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgdbGame {
    pub id: u64,
    /// Unix timestamp in seconds.
    #[serde(default)]
    pub first_release_date: Option<i64>,
    #[serde(default)]
    pub franchises: Vec<u64>,
    #[serde(default)]
    pub game_modes: Vec<u64>,
    #[serde(default)]
    pub genres: Vec<u64>,
    #[serde(default)]
    pub involved_companies: Vec<u64>,
    #[serde(default)]
    pub keywords: Vec<u64>,
    pub name: String,
    #[serde(default)]
    pub platforms: Vec<u64>,
    #[serde(default)]
    pub player_perspectives: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
    #[serde(default)]
    pub themes: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgdbGenre {
    pub id: u64,
    pub name: String,
}

/// OAuth client-credentials response from the Twitch token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}
