use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    pub fn new(id: impl Into<String>) -> Self {
        OrganizationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tenant branding as fetched from the branding source. Immutable once
/// fetched; a newer fetch supersedes it, nothing mutates it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingRecord {
    pub organization: OrganizationId,

    /// semantic color role ("primary", "danger", ...) -> color value
    #[serde(default)]
    pub colors: HashMap<String, String>,

    #[serde(default)]
    pub font_family: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,
}

impl BrandingRecord {
    pub fn is_blank(&self) -> bool {
        self.colors.is_empty() && self.font_family.is_none() && self.logo_url.is_none()
    }
}
