//! Options controlling how notation is parsed
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use serde::{Serialize, Deserialize};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// How to treat a fifth character in a UCI move that isn't a promotion letter
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionParsing {
    /// Ignore the character and parse the move as a non-promotion
    Permissive,
    /// Reject the move with `Error::InvalidPromotion`
    Strict,
}

impl Default for PromotionParsing {
    fn default() -> Self {
        PromotionParsing::Permissive
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Notation options, usually read from a YAML file such as
///
/// ```yaml
/// promotion: strict
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotationConfig {
    /// Handling of unrecognized promotion letters
    pub promotion: PromotionParsing,
}

impl NotationConfig {
    /// A configuration which rejects unrecognized promotion letters
    pub fn strict() -> Self {
        NotationConfig { promotion: PromotionParsing::Strict }
    }

    /// Parses a configuration from YAML text
    pub fn from_yaml(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Returns the configuration as YAML text
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Failure to read or parse a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError { }

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{NotationConfig, PromotionParsing};

    #[test]
    fn default_is_permissive() {
        assert_eq!(NotationConfig::default().promotion, PromotionParsing::Permissive);
    }

    #[test]
    fn reads_yaml() {
        let config = NotationConfig::from_yaml("promotion: strict").unwrap();
        assert_eq!(config, NotationConfig::strict());

        let config = NotationConfig::from_yaml("promotion: permissive").unwrap();
        assert_eq!(config.promotion, PromotionParsing::Permissive);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = NotationConfig::from_yaml("{}").unwrap();
        assert_eq!(config, NotationConfig::default());
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(NotationConfig::from_yaml("promotion: lenient").is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let yaml = NotationConfig::strict().to_yaml().unwrap();
        assert_eq!(NotationConfig::from_yaml(&yaml).unwrap(), NotationConfig::strict());
    }
}
