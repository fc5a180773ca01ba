//! Strategy registry.

use std::sync::Arc;

use crate::calculator::PaceError;
use crate::strategy::{ConservativeStart, EvenPace, NegativeSplit, PacingStrategy, PositiveSplit};

/// Lookup trait for pacing strategies.
pub trait StrategyRegistry: Send + Sync {
    /// Get a strategy by slug or display name (case-insensitive).
    fn get(&self, name: &str) -> Result<Arc<dyn PacingStrategy>, PaceError>;

    /// All strategies in presentation order.
    fn all(&self) -> &[Arc<dyn PacingStrategy>];

    /// Slugs of every registered strategy.
    fn available(&self) -> Vec<&str> {
        self.all().iter().map(|s| s.slug()).collect()
    }
}

/// The four built-in strategies: even, negative, positive, conservative.
pub struct DefaultRegistry {
    strategies: Vec<Arc<dyn PacingStrategy>>,
}

impl DefaultRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Arc::new(EvenPace),
                Arc::new(NegativeSplit),
                Arc::new(PositiveSplit),
                Arc::new(ConservativeStart),
            ],
        }
    }
}

impl Default for DefaultRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyRegistry for DefaultRegistry {
    fn get(&self, name: &str) -> Result<Arc<dyn PacingStrategy>, PaceError> {
        let wanted = name.trim();
        self.strategies
            .iter()
            .find(|s| {
                s.slug().eq_ignore_ascii_case(wanted) || s.name().eq_ignore_ascii_case(wanted)
            })
            .map(Arc::clone)
            .ok_or_else(|| PaceError::UnknownStrategy(name.to_string()))
    }

    fn all(&self) -> &[Arc<dyn PacingStrategy>] {
        &self.strategies
    }
}
