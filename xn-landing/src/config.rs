//! Landing page configuration.
//!
//! The defaults are the constants of the page this crate models; a JSON file
//! can override any subset of them.
use crate::page::Slideshow;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Assets and analytics registered for one display name.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Profile {
    /// ASCII directory name under the asset base holding the page images.
    pub slug: String,
    /// Analytics site id. Empty means the page loads no analytics script.
    #[serde(default)]
    pub site_id: String,
}

impl Profile {
    pub fn new(slug: &str, site_id: &str) -> Self {
        Profile {
            slug: slug.to_owned(),
            site_id: site_id.to_owned(),
        }
    }

    #[inline]
    pub fn analytics_id(&self) -> Option<&str> {
        Some(self.site_id.as_str()).filter(|id| !id.is_empty())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub(crate) asset_base: String,
    pub(crate) music: String,
    pub(crate) pages: u32,
    pub(crate) default_name: String,
    pub(crate) sample_name: String,
    pub(crate) domain_suffix: String,
    pub(crate) trade_url: String,
    pub(crate) analytics_url: String,
    pub(crate) slideshow: Slideshow,
    pub(crate) profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        let profiles = [
            ("黄婷婷", "huangtingting", "08c2afd5967136ddf228cce9f56182b8"),
            ("孙芮", "sunrui", "49e13a28947599244b51340f131ddb46"),
            ("王子文", "wangziwen", ""),
            ("谢霆锋", "xietingfeng", ""),
            ("王心凌", "wangxinling", ""),
            ("杨丞琳", "yangchenglin", "c775ba6530ecd7e0d918fcbf2405da47"),
            ("张韶涵", "zhangshaohan", ""),
        ]
        .iter()
        .map(|&(name, slug, site_id)| (name.to_owned(), Profile::new(slug, site_id)))
        .collect();
        Config {
            asset_base: "http://bucuo.site/domain/".to_owned(),
            music: "music.mp3".to_owned(),
            pages: 3,
            default_name: "黄婷婷".to_owned(),
            sample_name: "张小伟".to_owned(),
            domain_suffix: "我爱你".to_owned(),
            trade_url: "https://wanwang.aliyun.com/nametrade/detail/online.html?domainName="
                .to_owned(),
            analytics_url: "http://hm.baidu.com/hm.js?".to_owned(),
            slideshow: Slideshow::default(),
            profiles,
        }
    }
}

impl Config {
    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Config::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            profiles = config.profiles.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    #[inline]
    pub fn asset_base(mut self, value: &str) -> Self {
        self.asset_base = value.to_owned();
        self
    }

    #[inline]
    pub fn pages(mut self, value: u32) -> Self {
        self.pages = value;
        self
    }

    #[inline]
    pub fn default_name(mut self, value: &str) -> Self {
        self.default_name = value.to_owned();
        self
    }

    #[inline]
    pub fn sample_name(mut self, value: &str) -> Self {
        self.sample_name = value.to_owned();
        self
    }

    #[inline]
    pub fn domain_suffix(mut self, value: &str) -> Self {
        self.domain_suffix = value.to_owned();
        self
    }

    /// Register (or replace) the profile of a display name.
    #[inline]
    pub fn profile(mut self, name: &str, profile: Profile) -> Self {
        self.profiles.insert(name.to_owned(), profile);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn fallback_name(&self) -> &str {
        &self.default_name
    }

    /// The asset directory for `name`, borrowing the default name's when
    /// `name` has no profile of its own.
    pub fn slug_for(&self, name: &str) -> &str {
        self.lookup(name)
            .or_else(|| self.lookup(&self.default_name))
            .map_or("", |profile| profile.slug.as_str())
    }

    /// Analytics are only loaded for names registered with a site id.
    pub fn analytics_id_for(&self, name: &str) -> Option<&str> {
        self.lookup(name).and_then(Profile::analytics_id)
    }
}
