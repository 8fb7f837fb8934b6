use serde::{Deserialize, Serialize};
use std::fmt;

use super::lenient;

/// Match identifier as the listing API sends it: sometimes a number,
/// sometimes a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum MatchId {
    Number(i64),
    Text(String),
}

impl MatchId {
    /// Canonical text form. Two ids are loosely equal when their keys are,
    /// so `1` and `"1"` name the same match.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            MatchId::Number(n) => n.to_string(),
            MatchId::Text(s) => s.clone(),
        }
    }

    #[must_use]
    pub fn loosely_equals(&self, other: &str) -> bool {
        match self {
            MatchId::Number(n) => other.trim().parse::<i64>().is_ok_and(|o| o == *n),
            MatchId::Text(s) => s == other,
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Number(n) => write!(f, "{n}"),
            MatchId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    #[serde(default, deserialize_with = "lenient::object")]
    pub home: Option<Team>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub away: Option<Team>,
}

/// One entry of a match's `sources` list; the pair addresses the stream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamSource {
    pub source: String,
    pub id: String,
}

/// A listing entry from the matches API. Every field is optional and
/// wrong-typed values decode as absent, so a record never fails on shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default, deserialize_with = "lenient::match_id")]
    pub id: Option<MatchId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: Option<String>,
    /// Kickoff, epoch milliseconds.
    #[serde(default, deserialize_with = "lenient::integer")]
    pub date: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_live: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub teams: Option<Teams>,
    #[serde(default, deserialize_with = "lenient::sources")]
    pub sources: Vec<StreamSource>,
}

impl MatchRecord {
    /// `title`, else `name`.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    /// Kickoff in epoch milliseconds, 0 when unknown.
    #[must_use]
    pub fn kickoff_ms(&self) -> i64 {
        self.date.unwrap_or(0)
    }

    #[must_use]
    pub fn id_key(&self) -> Option<String> {
        self.id.as_ref().map(MatchId::key)
    }

    /// The id used for navigation: the record's own id, else the id of its
    /// first stream source.
    #[must_use]
    pub fn resolved_id(&self) -> Option<String> {
        self.id_key()
            .or_else(|| self.first_source().map(|s| s.id.clone()))
    }

    #[must_use]
    pub fn first_source(&self) -> Option<&StreamSource> {
        self.sources.first()
    }

    #[must_use]
    pub fn home_badge(&self) -> Option<&str> {
        self.teams
            .as_ref()
            .and_then(|t| t.home.as_ref())
            .and_then(|t| t.badge.as_deref())
    }

    #[must_use]
    pub fn away_badge(&self) -> Option<&str> {
        self.teams
            .as_ref()
            .and_then(|t| t.away.as_ref())
            .and_then(|t| t.badge.as_deref())
    }
}
