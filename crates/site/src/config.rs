//! Site configuration.
//!
//! Settings load from a JSON document in which every field is optional, and
//! can then be overridden from `FOLIO_*` environment variables:
//!
//! | Variable | Setting |
//! |---|---|
//! | `FOLIO_PROJECT_ID` | `content.projectId` |
//! | `FOLIO_DATASET` | `content.dataset` |
//! | `FOLIO_API_VERSION` | `content.apiVersion` |
//! | `FOLIO_USE_CDN` | `content.useCdn` (`true`/`false`/`1`/`0`) |
//! | `FOLIO_SITE_NAME` | `site.name` |
//! | `FOLIO_BASE_URL` | `site.baseUrl` |
//! | `FOLIO_OG_IMAGE` | `site.ogImage` |
//! | `FOLIO_TWITTER_HANDLE` | `site.twitterHandle` |
//! | `FOLIO_ANALYTICS_ID` | `site.analyticsId` |

use crate::content::ContentConfig;
use crate::error::ConfigError;
use folio_render::{ImageCdn, RenderOptions, SiteInfo};
use serde::Deserialize;

/// Everything a [`crate::Site`] needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Content-store coordinates.
    pub content: ContentConfig,
    /// Page presentation.
    pub site: SiteInfo,
    /// Block renderer options.
    pub render: RenderOptions,
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

impl SiteConfig {
    /// Parses configuration JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies `FOLIO_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies `FOLIO_*` overrides read through `lookup`. Empty values are
    /// ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get("FOLIO_PROJECT_ID") {
            self.content.project_id = value;
        }
        if let Some(value) = get("FOLIO_DATASET") {
            self.content.dataset = value;
        }
        if let Some(value) = get("FOLIO_API_VERSION") {
            self.content.api_version = value;
        }
        if let Some(value) = get("FOLIO_USE_CDN") {
            self.content.use_cdn = parse_bool("FOLIO_USE_CDN", &value)?;
        }
        if let Some(value) = get("FOLIO_SITE_NAME") {
            self.site.name = value;
        }
        if let Some(value) = get("FOLIO_BASE_URL") {
            self.site.base_url = value;
        }
        if let Some(value) = get("FOLIO_OG_IMAGE") {
            self.site.og_image = Some(value);
        }
        if let Some(value) = get("FOLIO_TWITTER_HANDLE") {
            self.site.twitter_handle = Some(value);
        }
        if let Some(value) = get("FOLIO_ANALYTICS_ID") {
            self.site.analytics_id = Some(value);
        }
        Ok(self)
    }

    /// Checks the settings that would otherwise fail at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.content.validate()?;
        if !(self.site.base_url.starts_with("https://") || self.site.base_url.starts_with("http://"))
        {
            return Err(ConfigError::Invalid(format!(
                "base URL '{}' must be absolute",
                self.site.base_url
            )));
        }
        if self.render.max_callout_depth == 0 {
            log::warn!("maxCalloutDepth is 0; every callout will be skipped");
        }
        Ok(())
    }

    /// Renderer options with the image CDN pointed at the content project
    /// unless one was configured explicitly.
    pub fn render_options(&self) -> RenderOptions {
        let mut options = self.render.clone();
        if options.image_cdn.is_none() && !self.content.project_id.is_empty() {
            options.image_cdn = Some(ImageCdn::new(
                self.content.project_id.clone(),
                self.content.dataset.clone(),
            ));
        }
        options
    }
}
