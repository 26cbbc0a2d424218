#![allow(dead_code)]

pub mod fixtures;

use folio::{
    BlockRegistry, CompositionEngine, EngineBuilder, ExecutorImpl, FolioError, InMemoryResourceProvider, ResourceError,
    Section, SectionList, catalog,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// All fixture templates held in memory.
pub fn resources() -> Result<Arc<InMemoryResourceProvider>, ResourceError> {
    let provider = InMemoryResourceProvider::new();
    for (path, source) in fixtures::TEMPLATES {
        provider.add_str(*path, source)?;
    }
    Ok(Arc::new(provider))
}

pub fn registry() -> Result<BlockRegistry, FolioError> {
    let definitions = catalog::parse_catalog(&fixtures::catalog_json().to_string(), "fixtures")?;
    Ok(BlockRegistry::from_definitions(definitions)?)
}

/// An engine over the fixture catalog and templates.
pub fn engine_with(executor: ExecutorImpl) -> Result<CompositionEngine, Box<dyn std::error::Error>> {
    Ok(EngineBuilder::new()
        .with_registry(registry()?)
        .with_resource_provider(resources()?)
        .with_executor(executor)
        .build()?)
}

pub fn engine() -> Result<CompositionEngine, Box<dyn std::error::Error>> {
    engine_with(ExecutorImpl::Sync(Default::default()))
}

pub fn page(json: serde_json::Value) -> Result<SectionList, FolioError> {
    catalog::parse_page(&json.to_string())
}

pub fn sections(json: serde_json::Value) -> Result<Vec<Section>, FolioError> {
    Ok(page(json)?.into_sections())
}
