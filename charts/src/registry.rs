//! Chart backend contract and the per-target instance registry.
//!
//! DESIGN
//! ======
//! A drawing surface can host at most one live chart. [`ChartRegistry`] owns
//! every live instance keyed by its target id and always disposes of the old
//! instance before asking the backend for a new one, so repeated renders of
//! the same target never overlap.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use crate::config::ChartConfig;
use crate::error::ChartResult;

/// A live chart bound to one drawing surface.
pub trait ChartInstance {
    /// Release the surface. Called exactly once, before the instance is dropped.
    fn destroy(self);
}

/// Something that can turn a config into a live chart on a named target.
pub trait ChartBackend {
    type Instance: ChartInstance;

    /// Create a chart on `target_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot host a chart or drawing fails.
    fn create(&mut self, target_id: &str, config: &ChartConfig) -> ChartResult<Self::Instance>;
}

/// Owns the live chart instance for each target.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    live: HashMap<String, B::Instance>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend, live: HashMap::new() }
    }

    /// Draw `config` on `target_id`, destroying whatever was there first.
    ///
    /// If creation fails the target is left empty.
    ///
    /// # Errors
    ///
    /// Returns the config validation or backend error.
    pub fn replace(&mut self, target_id: &str, config: &ChartConfig) -> ChartResult<()> {
        if let Some(previous) = self.live.remove(target_id) {
            log::debug!("destroying chart on {target_id}");
            previous.destroy();
        }
        config.validate()?;
        let instance = self.backend.create(target_id, config)?;
        self.live.insert(target_id.to_owned(), instance);
        log::debug!("created {:?} chart on {target_id}", config.kind);
        Ok(())
    }

    /// Destroy every live chart.
    pub fn clear(&mut self) {
        for (_, instance) in self.live.drain() {
            instance.destroy();
        }
    }

    #[must_use]
    pub fn is_live(&self, target_id: &str) -> bool {
        self.live.contains_key(target_id)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
