//! Engine options and configuration
//!
//! Options are read from an rc-style file:
//!
//! ```text
//! # delverc
//! OPTIONS=smart_learn,!smart_cheat
//! OPTIONS=summon_range:3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::OptionsError;

/// User-configurable engine options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Casters remember which resistances the player has shown
    pub smart_learn: bool,
    /// Casters already know everything, so nothing is recorded
    pub smart_cheat: bool,
    /// Copying a spell requires the player's learning stance
    pub learn_needs_stance: bool,
    /// First ring searched when placing summoned creatures
    pub summon_range: u8,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            smart_learn: true,
            smart_cheat: false,
            learn_needs_stance: true,
            summon_range: 2,
        }
    }
}

impl EngineOptions {
    /// Load options from a config file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    options.parse_option(opt.trim())?;
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if opt.is_empty() {
            return Ok(());
        }

        // key:value or key=value
        if let Some((name, value)) = opt.split_once([':', '=']) {
            return self.set_option(name.trim(), Some(value.trim()));
        }

        // Handle negation
        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };

        match name {
            "smart_learn" => self.smart_learn = !negated,
            "smart_cheat" => self.smart_cheat = !negated,
            "learn_needs_stance" => self.learn_needs_stance = !negated,
            "summon_range" => self.set_option(name, None)?,
            _ => return Err(OptionsError::UnknownOption(opt.to_string())),
        }
        Ok(())
    }

    /// Set an option that takes a value
    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let value = value.ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
        let invalid = || OptionsError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "summon_range" => {
                let range: u8 = value.parse().map_err(|_| invalid())?;
                if range == 0 {
                    return Err(invalid());
                }
                self.summon_range = range;
            }
            "smart_learn" | "smart_cheat" | "learn_needs_stance" => {
                let flag = match value {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
                match name {
                    "smart_learn" => self.smart_learn = flag,
                    "smart_cheat" => self.smart_cheat = flag,
                    _ => self.learn_needs_stance = flag,
                }
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Write options back out in config file format
    pub fn to_config_string(&self) -> String {
        let flag = |on: bool, name: &str| {
            if on {
                format!("OPTIONS={}", name)
            } else {
                format!("OPTIONS=!{}", name)
            }
        };

        let lines = [
            "# Delve engine configuration".to_string(),
            String::new(),
            flag(self.smart_learn, "smart_learn"),
            flag(self.smart_cheat, "smart_cheat"),
            flag(self.learn_needs_stance, "learn_needs_stance"),
            format!("OPTIONS=summon_range:{}", self.summon_range),
        ];
        lines.join("\n") + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = EngineOptions::default();
        assert!(opts.smart_learn);
        assert!(!opts.smart_cheat);
        assert!(opts.learn_needs_stance);
        assert_eq!(opts.summon_range, 2);
    }

    #[test]
    fn test_parse_bool_option() {
        let opts =
            EngineOptions::parse_config("OPTIONS=!smart_learn,smart_cheat\nOPTIONS=nolearn_needs_stance")
                .unwrap();
        assert!(!opts.smart_learn);
        assert!(opts.smart_cheat);
        assert!(!opts.learn_needs_stance);
    }

    #[test]
    fn test_parse_value_option() {
        let opts = EngineOptions::parse_config("# comment\n\nOPTIONS=summon_range:4").unwrap();
        assert_eq!(opts.summon_range, 4);
        let opts = EngineOptions::parse_config("OPTIONS=smart_cheat=on").unwrap();
        assert!(opts.smart_cheat);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            EngineOptions::parse_config("OPTIONS=color"),
            Err(OptionsError::UnknownOption(_))
        ));
        assert!(matches!(
            EngineOptions::parse_config("OPTIONS=summon_range:far"),
            Err(OptionsError::InvalidValue { .. })
        ));
        assert!(matches!(
            EngineOptions::parse_config("OPTIONS=summon_range"),
            Err(OptionsError::MissingValue(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = EngineOptions::load_from_file(Path::new("/nonexistent/delverc"));
        assert!(matches!(result, Err(OptionsError::Io(_))));
    }

    #[test]
    fn test_roundtrip() {
        let opts = EngineOptions {
            smart_learn: false,
            smart_cheat: true,
            learn_needs_stance: false,
            summon_range: 5,
        };
        let parsed = EngineOptions::parse_config(&opts.to_config_string()).unwrap();
        assert_eq!(parsed, opts);
    }
}
