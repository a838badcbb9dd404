//! Movie records returned by `/v2/movie`.

use serde::{Deserialize, Serialize};

/// Server-assigned movie identifier (e.g. "5cd95395de30eff6ebccde5d").
pub type MovieID = String;

/// A movie from the catalog. All money figures are in millions of USD.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: MovieID,

    pub name: String,

    pub runtime_in_minutes: u32,

    pub budget_in_millions: f64,

    pub box_office_revenue_in_millions: f64,

    pub academy_award_nominations: u32,

    pub academy_award_wins: u32,

    /// Rotten Tomatoes score, nominally 0-100.
    pub rotten_tomatoes_score: f64,
}
