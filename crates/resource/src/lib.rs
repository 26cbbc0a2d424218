//! Template asset providers for folio.
//!
//! - [`FilesystemResourceProvider`]: templates stored under a directory
//! - [`InMemoryResourceProvider`]: re-exported from folio-traits

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use folio_traits::InMemoryResourceProvider;
