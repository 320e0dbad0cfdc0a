//! Template listings fetched over HTTP.

use pagewright::template::{parse_template_list, TemplateSource};
use pagewright::{Error, Template};

/// Template source reading `{ "templates": [...] }` from a URL.
pub struct RemoteTemplates {
    url: String,
}

impl RemoteTemplates {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn fetch(&self) -> Result<String, reqwest::Error> {
        reqwest::get(&self.url)
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

impl TemplateSource for RemoteTemplates {
    fn load_templates(&self) -> pagewright::Result<Vec<Template>> {
        log::debug!("Fetching templates from {}", self.url);

        let rt = tokio::runtime::Runtime::new()?;
        let body = rt
            .block_on(self.fetch())
            .map_err(|e| Error::Template(format!("{}: {}", self.url, e)))?;
        parse_template_list(&body)
    }
}

/// Check whether a template location looks like a URL.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
