//! Health-data provider adapters
//!
//! [`traits`] defines the provider boundary; [`archive`] implements it over
//! on-disk JSON dumps; [`client`] is the configuration-driven factory.

pub mod archive;
pub mod client;
pub mod traits;

pub use archive::ArchiveProvider;
pub use client::ProviderClient;
pub use traits::HealthDataProvider;
