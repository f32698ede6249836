use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub key_fingerprint: String,
}
