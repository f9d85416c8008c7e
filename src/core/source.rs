use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::constants::{BRAND_FILE_EXTENSION, BRAND_FILE_PREFIX};
use crate::core::error::BrandingError;
use crate::core::record::{BrandingRecord, OrganizationId};

/// Boundary to whatever actually stores branding (registry database, API).
/// `Ok(None)` means the organization has no branding configured.
#[async_trait]
pub trait BrandingSource: Send + Sync {
    async fn branding_for_organization(
        &self,
        organization: &OrganizationId,
    ) -> Result<Option<BrandingRecord>, BrandingError>;
}

/// In-memory source for local development and tests.
#[derive(Debug, Default)]
pub struct StaticSource {
    records: HashMap<OrganizationId, BrandingRecord>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: BrandingRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn insert(&mut self, record: BrandingRecord) {
        self.records.insert(record.organization.clone(), record);
    }
}

#[async_trait]
impl BrandingSource for StaticSource {
    async fn branding_for_organization(
        &self,
        organization: &OrganizationId,
    ) -> Result<Option<BrandingRecord>, BrandingError> {
        Ok(self.records.get(organization).cloned())
    }
}

/// Directory of `org_<id>.json` files, one branding record per organization.
pub struct JsonFileSource {
    base_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        JsonFileSource {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, organization: &OrganizationId) -> PathBuf {
        self.base_dir.join(format!(
            "{}{}.{}",
            BRAND_FILE_PREFIX, organization, BRAND_FILE_EXTENSION
        ))
    }
}

#[async_trait]
impl BrandingSource for JsonFileSource {
    async fn branding_for_organization(
        &self,
        organization: &OrganizationId,
    ) -> Result<Option<BrandingRecord>, BrandingError> {
        let path = self.path_for(organization);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| BrandingError::SourceUnavailable(format!("reading {:?}: {}", path, e)))?;
        let record: BrandingRecord = serde_json::from_str(&raw)
            .map_err(|e| BrandingError::SourceUnavailable(format!("parsing {:?}: {}", path, e)))?;

        if record.is_blank() {
            return Err(BrandingError::PartialRecord {
                organization: organization.to_string(),
                detail: "no colors, font_family or logo_url".to_string(),
            });
        }

        Ok(Some(record))
    }
}
