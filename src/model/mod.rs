mod provider_kind;
mod resolver;

pub use provider_kind::{ProviderKind, default_base_url, default_model, provider_from_name};
pub use resolver::{ProviderCredentials, resolve_key};
