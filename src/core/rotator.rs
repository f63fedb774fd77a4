use crate::utils::error::{FelineError, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cycles through a fixed, non-empty list of facts.
#[derive(Debug, Clone)]
pub struct FactRotator {
    facts: Vec<String>,
    current_index: usize,
}

/// Rotator shared between the session and its auto-advance task.
pub type SharedRotator = Arc<Mutex<FactRotator>>;

impl FactRotator {
    pub fn new(facts: Vec<String>) -> Result<Self> {
        if facts.is_empty() {
            return Err(FelineError::invalid_configuration(
                "fact list must contain at least one fact",
            ));
        }
        Ok(Self {
            facts,
            current_index: 0,
        })
    }

    pub fn current(&self) -> &str {
        &self.facts[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.facts.len();
    }

    pub fn into_shared(self) -> SharedRotator {
        Arc::new(Mutex::new(self))
    }
}

/// Locks a shared rotator. The index is valid after every statement, so a
/// poisoned lock still holds a usable rotator.
pub fn lock_rotator(rotator: &SharedRotator) -> MutexGuard<'_, FactRotator> {
    rotator.lock().unwrap_or_else(PoisonError::into_inner)
}
