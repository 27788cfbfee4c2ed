//! Search configuration assembly.
//!
//! A run starts from [`SearchConfig::default`], replaced by a TOML file when
//! one is given, and finally patched by environment variables.

use std::env;
use std::path::Path;

use anyhow::Result;
use delve_content::ConfigLoader;
use delve_core::SearchConfig;

/// Overrides read from the process environment.
///
/// Environment variables:
/// - `DELVE_MAX_STATES` - Expanded-state budget
/// - `DELVE_HERO_HP` - Base hero hp
/// - `DELVE_HERO_OFFENSE` - Base hero offense
/// - `DELVE_HERO_DEFENSE` - Base hero defense
/// - `DELVE_SHOW_STATS` - Print search counters after a solve (default: true)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub max_expanded_states: Option<usize>,
    pub hero_hp: Option<i32>,
    pub hero_offense: Option<i32>,
    pub hero_defense: Option<i32>,
    pub show_stats: Option<bool>,
}

impl EnvOverrides {
    /// Construct overrides from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct overrides from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_expanded_states: read_env(&lookup, "DELVE_MAX_STATES")
                .map(|limit: usize| limit.max(1)),
            hero_hp: read_env(&lookup, "DELVE_HERO_HP"),
            hero_offense: read_env(&lookup, "DELVE_HERO_OFFENSE"),
            hero_defense: read_env(&lookup, "DELVE_HERO_DEFENSE"),
            show_stats: read_env_bool(&lookup, "DELVE_SHOW_STATS"),
        }
    }

    pub fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(limit) = self.max_expanded_states {
            config.max_expanded_states = limit;
        }
        if let Some(hp) = self.hero_hp {
            config.hero.hp = hp;
        }
        if let Some(offense) = self.hero_offense {
            config.hero.offense = offense;
        }
        if let Some(defense) = self.hero_defense {
            config.hero.defense = defense;
        }
        config
    }

    pub fn show_stats(&self) -> bool {
        self.show_stats.unwrap_or(true)
    }
}

/// Loads the optional TOML file and applies environment overrides.
pub fn load_search_config(path: Option<&Path>, overrides: &EnvOverrides) -> Result<SearchConfig> {
    let base = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => SearchConfig::default(),
    };
    Ok(overrides.apply(base))
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

fn read_env_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_patch_only_given_fields() {
        let overrides = EnvOverrides::from_lookup(lookup(&[
            ("DELVE_HERO_HP", "42"),
            ("DELVE_MAX_STATES", "0"),
            ("DELVE_HERO_OFFENSE", "not a number"),
        ]));

        let config = overrides.apply(SearchConfig::default());
        assert_eq!(config.hero.hp, 42);
        assert_eq!(config.hero.offense, SearchConfig::BASE_OFFENSE);
        assert_eq!(config.hero.defense, SearchConfig::BASE_DEFENSE);
        assert_eq!(config.max_expanded_states, 1);
    }

    #[test]
    fn show_stats_defaults_on() {
        assert!(EnvOverrides::default().show_stats());
        let off = EnvOverrides::from_lookup(lookup(&[("DELVE_SHOW_STATS", "No")]));
        assert!(!off.show_stats());
    }

    #[test]
    fn file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        std::fs::write(&path, "max_expanded_states = 77\n").unwrap();

        let overrides = EnvOverrides::from_lookup(lookup(&[("DELVE_HERO_DEFENSE", "9")]));
        let config = load_search_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.max_expanded_states, 77);
        assert_eq!(config.hero.defense, 9);
    }
}
