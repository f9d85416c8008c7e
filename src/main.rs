use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use brandcast::core::applier::BrandingApplier;
use brandcast::core::engine::BrandingEngine;
use brandcast::core::record::OrganizationId;
use brandcast::core::scope::MemoryScope;
use brandcast::core::source::JsonFileSource;

// cargo run -- --brand-dir ./branding --organization clinic-a

#[derive(Parser, Debug)]
#[command(name = "brandcast")]
pub struct Params {
    /// Directory holding one org_<id>.json branding record per organization.
    #[arg(long, env = "BRANDCAST_BRAND_DIR", default_value = "./branding")]
    pub brand_dir: String,

    #[arg(long, env = "BRANDCAST_ORG")]
    pub organization: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_thread_ids(true)
        .compact()
        .init();

    let params = Params::parse();
    info!("brandcast starting with params: {:?}", params);

    let source = JsonFileSource::new(&params.brand_dir);
    let engine = BrandingEngine::new(Arc::new(source));
    let mut applier = BrandingApplier::new(engine.subscribe(), MemoryScope::new());

    let organization = OrganizationId::new(params.organization);
    engine.load(&organization).await;
    applier.sync();

    let scope = applier.into_scope();
    if scope.is_empty() {
        println!("{}: no branding, default styling", organization);
    } else {
        for (name, value) in scope.iter() {
            println!("{} = {}", name, value);
        }
    }

    Ok(())
}
