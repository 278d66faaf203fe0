//! API Configuration
//!
//! The base URL comes from `LOVETODO_API_URL` at build time and can be
//! overridden per deployment with `<meta name="lovetodo-api-url" content="...">`
//! in the host page.

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

const API_URL_META: &str = "lovetodo-api-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Build-time configuration only
    pub fn from_env() -> Self {
        Self::new(option_env!("LOVETODO_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Page meta override if present, otherwise the build-time value
    pub fn resolve() -> Self {
        match meta_override() {
            Some(url) => {
                log::info!("[CONFIG] API URL overridden by page meta: {}", url);
                Self::new(&url)
            }
            None => Self::from_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!(r#"meta[name="{}"]"#, API_URL_META);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
        .filter(|content| !content.trim().is_empty())
}
