pub mod api_key;
pub mod policy;

pub use api_key::{ApiKeyError, get_api_key};
pub use policy::{ApiKeyPolicy, fingerprint};
