// src/omdb/types.rs
use serde::{Deserialize, Serialize};

/// One OMDb title record. Search listings only fill a subset of the fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub rated: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default, rename = "imdbID")]
    pub imdb_id: String,
    #[serde(default, rename = "Type")]
    pub kind: String,
    #[serde(default)]
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Movie {
    pub fn is_negative(&self) -> bool {
        self.response == "False"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, rename = "Search")]
    pub search: Vec<Movie>,
    #[serde(default, rename = "totalResults")]
    pub total_results: String,
    #[serde(default, rename = "Response")]
    pub response: String,
    #[serde(default, rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResult {
    pub fn is_negative(&self) -> bool {
        self.response == "False"
    }
}
