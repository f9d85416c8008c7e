use std::collections::BTreeSet;

use tokio::sync::watch;
use tracing::debug;

use crate::core::engine::ThemeState;
use crate::core::scope::StyleScope;
use crate::core::variables::StyleVariableSet;

/// Synchronizes published theme state into the global style scope.
///
/// Reset-then-apply: names this applier wrote for a previous set and that the
/// incoming set no longer defines are removed before the new pairs are
/// written, so a tenant switch cannot leave stale keys behind. Names the
/// applier never wrote (the scope's built-in defaults) are left alone.
pub struct BrandingApplier<S: StyleScope> {
    state_rx: watch::Receiver<ThemeState>,
    scope: S,
    applied: BTreeSet<String>,
    ready_tx: watch::Sender<bool>,
}

impl<S: StyleScope> BrandingApplier<S> {
    pub fn new(state_rx: watch::Receiver<ThemeState>, scope: S) -> Self {
        let (ready_tx, _) = watch::channel(false);
        BrandingApplier {
            state_rx,
            scope,
            applied: BTreeSet::new(),
            ready_tx,
        }
    }

    /// Consumers await this before their first themed paint. Only raised
    /// after an apply step has fully written the scope.
    pub fn ready(&self) -> watch::Receiver<bool> {
        self.ready_tx.subscribe()
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    pub fn into_scope(self) -> S {
        self.scope
    }

    /// One synchronous apply step against the currently published state.
    /// Does nothing while the state is still unloaded. Returns whether an
    /// apply happened.
    pub fn sync(&mut self) -> bool {
        let state = self.state_rx.borrow_and_update().clone();
        if !state.loaded {
            return false;
        }

        self.apply(&state.variables);
        // scope is fully written at this point, safe to unblock consumers
        self.ready_tx.send_replace(true);
        true
    }

    fn apply(&mut self, variables: &StyleVariableSet) {
        let incoming: BTreeSet<String> = variables.names().map(str::to_string).collect();

        for stale in self.applied.difference(&incoming) {
            self.scope.remove_property(stale);
        }
        for (name, value) in variables.iter() {
            self.scope.set_property(name, value);
        }

        debug!(
            applied = incoming.len(),
            removed = self.applied.difference(&incoming).count(),
            "style variables applied"
        );
        self.applied = incoming;
    }

    /// Reactive loop: one apply step per observed state transition. Ends
    /// when the engine side of the channel is dropped.
    pub async fn run(mut self) -> S {
        loop {
            self.sync();
            if self.state_rx.changed().await.is_err() {
                debug!("theme state channel closed, applier stopping");
                return self.scope;
            }
        }
    }
}
