use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use serde_yaml::Value;

use notify::desktop::NOTIFIER_NAME as DESKTOP_NOTIFIER_NAME;
use query::nmcli::QUERY_NAME as NMCLI_QUERY_NAME;

const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Daemon configuration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The poll interval for re-classifying connectivity, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// The sinks that surface connectivity changes to the user.
    pub notifiers: HashMap<String, Value>,

    /// The capability used to look up the active network. Exactly one.
    #[serde(default = "default_query")]
    pub query: HashMap<String, Value>,
}

/// The ways a configuration can be invalid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    MissingNotifiers,
    MissingQuery,
    MultipleQueries,
    ZeroInterval,
}

impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.notifiers.len() == 0 {
            return Err(ValidationError::MissingNotifiers);
        }

        if self.query.len() == 0 {
            return Err(ValidationError::MissingQuery);
        }

        if self.query.len() > 1 {
            return Err(ValidationError::MultipleQueries);
        }

        if self.interval_ms == 0 {
            return Err(ValidationError::ZeroInterval);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut notifiers = HashMap::new();
        notifiers.insert(DESKTOP_NOTIFIER_NAME.to_owned(), Value::Null);

        Config {
            interval_ms: default_interval_ms(),
            notifiers,
            query: default_query(),
        }
    }
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_query() -> HashMap<String, Value> {
    let mut query = HashMap::new();
    query.insert(NMCLI_QUERY_NAME.to_owned(), Value::Null);
    query
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl Error for ValidationError {
    fn description(&self) -> &'static str {
        match *self {
            ValidationError::MissingNotifiers => "Missing notifiers to dispatch status changes to",
            ValidationError::MissingQuery => "Missing network query",
            ValidationError::MultipleQueries => "More than one network query configured",
            ValidationError::ZeroInterval => "Poll interval must be greater than zero",
        }
    }
}
