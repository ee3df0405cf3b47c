//! Loading configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a platform's vehicles are used to carry the package list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoadMode {
    /// Pick the single vehicle that carries the largest share of the packages.
    #[default]
    BestSingle,
    /// Spread the packages over the vehicles, each taking the previous leftovers.
    Distribute,
}

impl LoadMode {
    /// Returns a short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            LoadMode::BestSingle => "best-single",
            LoadMode::Distribute => "distribute",
        }
    }
}

/// Configuration for fleet classification.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Loading mode.
    pub mode: LoadMode,

    /// Stop trying further vehicles of a platform once one carries every package.
    pub stop_when_full: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: LoadMode::default(),
            stop_when_full: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the loading mode.
    pub fn with_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether a full load ends the search early.
    pub fn with_stop_when_full(mut self, stop: bool) -> Self {
        self.stop_when_full = stop;
        self
    }
}
