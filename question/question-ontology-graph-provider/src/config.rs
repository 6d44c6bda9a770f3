use question_pattern::TagSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub tags: TagSet,
}

impl ProviderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
