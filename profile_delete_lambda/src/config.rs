use redact::Secret;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Endpoint of the profile backend. Checked per request so a missing
    /// value is reported to callers instead of failing the cold start.
    #[serde(default)]
    pub backend_delete_url: Option<Secret<String>>,

    /// Name of the auth cookie to expire once the profile is deleted.
    #[serde(default)]
    pub auth_cookie_name: Option<String>,
}

impl Config {
    pub fn backend_delete_url(&self) -> Option<&str> {
        self.backend_delete_url
            .as_ref()
            .map(|url| url.expose_secret().trim())
            .filter(|url| !url.is_empty())
    }

    pub fn auth_cookie_name(&self) -> Option<&str> {
        self.auth_cookie_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
