use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::core::record::OrganizationId;
use crate::core::resolver::BrandingResolver;
use crate::core::source::BrandingSource;
use crate::core::variables::StyleVariableSet;

/// Process-wide theming state, published to appliers over a watch channel.
/// Starts unloaded and empty; `loaded` flips to true on the first resolution
/// (successful or defaulted) and stays true for the life of the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeState {
    pub variables: StyleVariableSet,
    pub loaded: bool,
}

/// Single owner of the theming state. `load` is called at startup and again
/// on every tenant switch; subscribers see each published transition.
pub struct BrandingEngine {
    resolver: BrandingResolver,
    state_tx: watch::Sender<ThemeState>,
    generation: AtomicU64,
}

impl BrandingEngine {
    pub fn new(source: Arc<dyn BrandingSource>) -> Self {
        let (state_tx, _) = watch::channel(ThemeState::default());
        BrandingEngine {
            resolver: BrandingResolver::new(source),
            state_tx,
            generation: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.state_tx.subscribe()
    }

    pub fn current(&self) -> ThemeState {
        self.state_tx.borrow().clone()
    }

    /// Resolve and publish branding for the given organization. Returns
    /// false when the result arrived stale: a newer `load` was issued while
    /// this one's fetch was in flight, so the result is discarded instead of
    /// being applied over the newer one.
    pub async fn load(&self, organization: &OrganizationId) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let resolution = self.resolver.resolve(organization).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(organization = %organization, ticket, "discarding stale branding resolution");
            return false;
        }

        self.state_tx.send_replace(ThemeState {
            variables: resolution.variables,
            loaded: resolution.loaded,
        });
        debug!(organization = %organization, ticket, "branding published");
        true
    }
}

impl std::fmt::Debug for BrandingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandingEngine")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

pub type SharedBrandingEngine = Arc<BrandingEngine>;
