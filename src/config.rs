use crate::error::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "makertoo_landing=info";

const TYPE_SPEED_KEY: &str = "LANDING_TYPE_SPEED_MS";
const DELETE_SPEED_KEY: &str = "LANDING_DELETE_SPEED_MS";
const HOLD_KEY: &str = "LANDING_HOLD_MS";
const CLOSE_ANIMATION_KEY: &str = "LANDING_CLOSE_ANIMATION_MS";
const LOG_KEY: &str = "LANDING_LOG";

/// Timing of the hero tagline typewriter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub type_interval_ms: u32,
    pub delete_interval_ms: u32,
    /// Pause on a fully typed phrase before deletion starts.
    pub hold_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: 80,
            delete_interval_ms: 40,
            hold_ms: 1800,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupConfig {
    /// Must match the sheet's exit transition in the page stylesheet.
    pub close_animation_ms: u32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            close_animation_ms: 350,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingConfig {
    pub typing: TypingConfig,
    pub popup: PopupConfig,
    pub log_filter: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            typing: TypingConfig::default(),
            popup: PopupConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LandingConfig {
    /// Reads the overrides baked in at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            TYPE_SPEED_KEY => option_env!("LANDING_TYPE_SPEED_MS"),
            DELETE_SPEED_KEY => option_env!("LANDING_DELETE_SPEED_MS"),
            HOLD_KEY => option_env!("LANDING_HOLD_MS"),
            CLOSE_ANIMATION_KEY => option_env!("LANDING_CLOSE_ANIMATION_MS"),
            LOG_KEY => option_env!("LANDING_LOG"),
            _ => None,
        })
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let typing = TypingConfig {
            type_interval_ms: interval(&lookup, TYPE_SPEED_KEY, defaults.typing.type_interval_ms)?,
            delete_interval_ms: interval(
                &lookup,
                DELETE_SPEED_KEY,
                defaults.typing.delete_interval_ms,
            )?,
            hold_ms: millis(&lookup, HOLD_KEY, defaults.typing.hold_ms)?,
        };
        let popup = PopupConfig {
            close_animation_ms: millis(
                &lookup,
                CLOSE_ANIMATION_KEY,
                defaults.popup.close_animation_ms,
            )?,
        };
        let log_filter = lookup(LOG_KEY)
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            typing,
            popup,
            log_filter,
        })
    }
}

fn millis<'a, F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|source| ConfigError::InvalidNumber {
                key,
                value: raw.to_string(),
                source,
            }),
    }
}

// A zero tick interval would retype the tagline on every frame.
fn interval<'a, F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    match millis(lookup, key, default)? {
        0 => Err(ConfigError::ZeroInterval { key }),
        ms => Ok(ms),
    }
}
