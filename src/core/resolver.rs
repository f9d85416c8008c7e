use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::record::OrganizationId;
use crate::core::source::BrandingSource;
use crate::core::variables::StyleVariableSet;

/// Outcome of a resolution. `loaded` is true even when the source failed or
/// had no record: branding is cosmetic, so the UI gets unblocked with the
/// scope's built-in defaults instead of waiting on a retry.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub variables: StyleVariableSet,
    pub loaded: bool,
}

pub struct BrandingResolver {
    source: Arc<dyn BrandingSource>,
}

impl BrandingResolver {
    pub fn new(source: Arc<dyn BrandingSource>) -> Self {
        BrandingResolver { source }
    }

    /// Fetch the organization's branding and transform it into style
    /// variables. Never fails hard; source errors are recovered here.
    pub async fn resolve(&self, organization: &OrganizationId) -> Resolution {
        debug!(organization = %organization, "resolving branding");

        let variables = match self.source.branding_for_organization(organization).await {
            Ok(Some(record)) => StyleVariableSet::from_record(&record),
            Ok(None) => {
                debug!(organization = %organization, "no branding record, using defaults");
                StyleVariableSet::default()
            }
            Err(e) => {
                warn!(organization = %organization, error = %e, "branding fetch failed, using defaults");
                StyleVariableSet::default()
            }
        };

        debug!(organization = %organization, variables = variables.len(), "branding resolved");
        Resolution {
            variables,
            loaded: true,
        }
    }
}
