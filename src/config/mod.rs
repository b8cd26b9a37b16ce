mod store;

use serde::{Deserialize, Deserializer, Serialize};

pub use store::{QueryStore, STORE_FILE_NAME};

/// The users and packages to report on
///
/// Users are resolved into their packages before any statistics are
/// collected; a resolved config always has an empty `users` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// npm user names whose collaborated packages should be included
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<String>,
    /// Package names to report on
    #[serde(default, deserialize_with = "null_as_empty")]
    pub packages: Vec<String>,
}

impl Config {
    /// Builds a config from raw CLI values
    ///
    /// Each user value may itself be a comma-separated list. Blank entries
    /// are dropped.
    pub fn from_args<U, P>(users: U, packages: P) -> Self
    where
        U: IntoIterator,
        U::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let users = users
            .into_iter()
            .flat_map(|value| {
                value
                    .as_ref()
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>()
            })
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            users,
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` when there is nothing to query
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.packages.is_empty()
    }
}

/// Reads a list that may be written as `null`
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
