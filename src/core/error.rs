use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandingError {
    #[error("branding source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("branding record for {organization} is missing expected fields: {detail}")]
    PartialRecord { organization: String, detail: String },
}
