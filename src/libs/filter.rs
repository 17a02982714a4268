//! Title ignore filter built from configured regex patterns.

use anyhow::{Context, Result};
use regex::Regex;

/// Decides whether a sampled window title should be logged.
///
/// A title matching any configured pattern is rejected; the monitor then
/// keeps its previously remembered title so the rejection does not
/// re-trigger on every tick.
pub struct TitleFilter {
    patterns: Vec<Regex>,
}

impl TitleFilter {
    /// Compiles the configured patterns. Fails on the first invalid regex
    /// so a broken configuration is reported up front instead of silently
    /// logging everything.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("invalid ignore pattern '{}'", p)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn accepts(&self, title: &str) -> bool {
        !self.patterns.iter().any(|p| p.is_match(title))
    }
}
