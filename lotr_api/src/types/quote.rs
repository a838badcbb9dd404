//! Quote records returned by `/v2/movie/{id}/quote`.

use serde::{Deserialize, Serialize};

use super::MovieID;

/// A line of dialog spoken in one of the movies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,

    /// The quoted line.
    pub dialog: String,

    /// Identifier of the movie the line is from.
    pub movie: MovieID,

    /// Identifier of the speaking character.
    pub character: String,
}
