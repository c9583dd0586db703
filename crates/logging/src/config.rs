//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a `-v` count.
    ///
    /// Level 0 is silent, level 1 reports statistics, level 2 adds skipped
    /// members and coarse loader/filter diagnostics, level 3 and above trace
    /// every traversal step.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.info.stats = 1;
            }
            2 => {
                config.info.stats = 2;
                config.info.skip = 1;
                config.debug.load = 1;
                config.debug.filter = 1;
                config.debug.walk = 1;
            }
            _ => {
                config.info.stats = 2;
                config.info.skip = 2;
                config.info.matches = 1;
                config.debug.load = 2;
                config.debug.filter = 2;
                config.debug.resolve = 3;
                config.debug.walk = 3;
            }
        }

        config
    }

    /// Apply a single info flag token (e.g., "stats2", "skip").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        let flag = match name {
            "match" => InfoFlag::Match,
            "skip" => InfoFlag::Skip,
            "stats" => InfoFlag::Stats,
            "all" => {
                self.info.set_all(level);
                return Ok(());
            }
            _ => return Err(format!("unknown info flag: {name}")),
        };

        self.info.set(flag, level);
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "walk3", "filter").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        let flag = match name {
            "filter" => DebugFlag::Filter,
            "load" => DebugFlag::Load,
            "resolve" => DebugFlag::Resolve,
            "walk" => DebugFlag::Walk,
            "all" => {
                self.debug.set_all(level);
                return Ok(());
            }
            _ => return Err(format!("unknown debug flag: {name}")),
        };

        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma-separated list of info tokens.
    pub fn apply_info_flags(&mut self, tokens: &str) -> Result<(), String> {
        split_tokens(tokens).try_for_each(|token| self.apply_info_flag(token))
    }

    /// Apply a comma-separated list of debug tokens.
    pub fn apply_debug_flags(&mut self, tokens: &str) -> Result<(), String> {
        split_tokens(tokens).try_for_each(|token| self.apply_debug_flag(token))
    }
}

fn split_tokens(tokens: &str) -> impl Iterator<Item = &str> {
    tokens
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse a flag token like "walk2" into ("walk", 2) or "load" into ("load", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    let digit_start = token.find(|c: char| c.is_ascii_digit());

    match digit_start {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
