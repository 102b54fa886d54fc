pub mod bible_api;
pub mod provider;
pub mod resolver;

pub use bible_api::BibleApiClient;
pub use provider::{LookupError, VerseLookup};
pub use resolver::{Resolution, ResolveOptions, resolve};
