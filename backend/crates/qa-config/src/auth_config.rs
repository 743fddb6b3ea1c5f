use crate::{ConfigError, ConfigErrorResult, DEFAULT_HASH_COST, MAX_HASH_COST, MIN_HASH_COST};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// bcrypt cost factor for new password hashes. Raising it only
    /// affects future registrations; existing hashes carry their own.
    pub hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.hash_cost < MIN_HASH_COST || self.hash_cost > MAX_HASH_COST {
            return Err(ConfigError::auth(format!(
                "auth.hash_cost must be {}-{}, got {}",
                MIN_HASH_COST, MAX_HASH_COST, self.hash_cost
            )));
        }

        Ok(())
    }
}
