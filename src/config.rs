use anyhow::Context;

const DEFAULT_API_VERSION: &str = "2024-01-01";
const DEFAULT_STUDIO_BUNDLE_URL: &str = "https://esm.sh/sanity@3";

/// Where the content lives
#[derive(Debug, Clone, PartialEq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// dated API version, e.g. 2024-01-01
    pub api_version: String,
    /// read through the edge cache instead of the live API
    pub use_cdn: bool,
    /// replaces the project-derived API host when set
    pub api_host: Option<String>,
}

impl SanityConfig {
    pub fn api_base(&self) -> String {
        match &self.api_host {
            Some(host) => host.clone(),
            None if self.use_cdn => format!("https://{}.apicdn.sanity.io", self.project_id),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sanity: SanityConfig,
    /// port (3000)
    pub port: u16,
    /// seconds a cached query result may be served
    pub revalidate_secs: u64,
    /// ES module the studio page imports
    pub studio_bundle_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let project_id = var("SANITY_PROJECT_ID").context("SANITY_PROJECT_ID must be provided")?;
        let dataset = var("SANITY_DATASET").context("SANITY_DATASET must be provided")?;

        let api_version =
            var("SANITY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let use_cdn = match var("SANITY_USE_CDN") {
            Some(value) => value
                .parse::<bool>()
                .context("SANITY_USE_CDN must be true or false")?,
            None => true,
        };

        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let revalidate_secs = var("REVALIDATE_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse::<u64>()
            .context("REVALIDATE_SECS must be a whole number of seconds")?;

        let studio_bundle_url =
            var("STUDIO_BUNDLE_URL").unwrap_or_else(|| DEFAULT_STUDIO_BUNDLE_URL.to_string());

        Ok(Config {
            sanity: SanityConfig {
                project_id,
                dataset,
                api_version,
                use_cdn,
                api_host: var("SANITY_API_HOST"),
            },
            port,
            revalidate_secs,
            studio_bundle_url,
        })
    }
}
