use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use brandcast::core::error::BrandingError;
use brandcast::core::record::{BrandingRecord, OrganizationId};
use brandcast::core::source::BrandingSource;

#[allow(dead_code)]
pub fn record(org: &str, colors: &[(&str, &str)]) -> BrandingRecord {
    let colors: HashMap<String, String> = colors
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    BrandingRecord {
        organization: OrganizationId::new(org),
        colors,
        font_family: None,
        logo_url: None,
    }
}

#[allow(dead_code)]
pub fn brand_dir() -> PathBuf {
    tempfile::Builder::new()
        .prefix("brandcast_test_")
        .tempdir()
        .expect("failed to create temp dir")
        .into_path()
}

#[allow(dead_code)]
pub fn write_record(dir: &Path, record: &BrandingRecord) {
    let path = dir.join(format!("org_{}.json", record.organization));
    let json = serde_json::to_string_pretty(record).expect("record should serialize");
    fs::write(path, json).expect("failed to write branding file");
}

/// Source double whose fetches take a configured amount of time. Used to
/// force one resolution to complete after a later one.
#[allow(dead_code)]
#[derive(Default)]
pub struct SlowSource {
    records: HashMap<OrganizationId, (Duration, BrandingRecord)>,
}

#[allow(dead_code)]
impl SlowSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, delay: Duration, record: BrandingRecord) -> Self {
        self.records
            .insert(record.organization.clone(), (delay, record));
        self
    }
}

#[async_trait]
impl BrandingSource for SlowSource {
    async fn branding_for_organization(
        &self,
        organization: &OrganizationId,
    ) -> Result<Option<BrandingRecord>, BrandingError> {
        match self.records.get(organization) {
            Some((delay, record)) => {
                tokio::time::sleep(*delay).await;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Source double that is always down.
#[allow(dead_code)]
pub struct FailingSource;

#[async_trait]
impl BrandingSource for FailingSource {
    async fn branding_for_organization(
        &self,
        _organization: &OrganizationId,
    ) -> Result<Option<BrandingRecord>, BrandingError> {
        Err(BrandingError::SourceUnavailable(
            "registry connection refused".to_string(),
        ))
    }
}
