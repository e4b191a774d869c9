//! Display-name resolution from the page URL.
use crate::{Config, Error, Result};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};
use url::{Host, Url};
use xn_label::{is_ace_label, punycode, PUNYCODE_PREFIX};

/// Where a [`DisplayName`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameSource {
    /// Decoded from the `xn--` label of the host.
    Decoded,
    /// The host carried no `xn--` label.
    Default,
    /// The `xn--` label did not decode.
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayName {
    pub name: String,
    pub source: NameSource,
}

impl DisplayName {
    fn configured(config: &Config, source: NameSource) -> Self {
        DisplayName {
            name: config.fallback_name().to_owned(),
            source,
        }
    }
}

/// The first `.`-separated label of the host `href` points at.
///
/// `href` may omit its scheme, in which case `http` is assumed. IP addresses
/// and URLs without a host have no label.
pub fn first_label(href: &str) -> Option<String> {
    let href = if href.contains("://") {
        Cow::Borrowed(href)
    } else {
        Cow::Owned(format!("http://{}", href))
    };
    match Url::parse(&href) {
        Ok(url) => match url.host()? {
            Host::Domain(domain) => domain
                .split('.')
                .next()
                .filter(|label| !label.is_empty())
                .map(str::to_owned),
            Host::Ipv4(_) | Host::Ipv6(_) => None,
        },
        // The URL parser validates `xn--` labels itself, so a label the
        // decoder would reject never reaches it. Cut the host out by hand.
        Err(error) => {
            debug!(%error, href = %href, "URL rejected, reading host label directly");
            raw_first_label(&href)
        }
    }
}

fn raw_first_label(href: &str) -> Option<String> {
    let rest = &href[href.find("://")? + 3..];
    let authority = rest.split(|c: char| matches!(c, '/' | '?' | '#')).next()?;
    let host = authority.rsplit('@').next()?;
    let label = host.split(|c: char| c == '.' || c == ':').next()?;
    if label.is_empty() {
        None
    } else {
        Some(label.to_ascii_lowercase())
    }
}

/// Decode one Punycode label, stripping its ACE prefix when present.
pub fn decode_label(label: &str) -> Result<String> {
    let encoded = if is_ace_label(label) {
        &label[PUNYCODE_PREFIX.len()..]
    } else {
        label
    };
    punycode::decode_to_string(encoded).map_err(|source| Error::Decode {
        label: label.to_owned(),
        source,
    })
}

/// Resolve the name a page at `href` is personalized for.
///
/// Hosts without an `xn--` label get the configured default name. A label
/// that fails to decode, or decodes to nothing, falls back to the default
/// name as well.
pub fn resolve(href: &str, config: &Config) -> DisplayName {
    let label = match first_label(href) {
        Some(label) if is_ace_label(&label) => label,
        _ => {
            debug!(href, "no ACE label, using the default name");
            return DisplayName::configured(config, NameSource::Default);
        }
    };
    match decode_label(&label) {
        Ok(name) if !name.is_empty() => {
            debug!(%label, %name, "decoded display name");
            DisplayName {
                name,
                source: NameSource::Decoded,
            }
        }
        Ok(_) => {
            warn!(%label, "ACE label decodes to an empty name, using the default name");
            DisplayName::configured(config, NameSource::Fallback)
        }
        Err(error) => {
            warn!(%error, "using the default name");
            DisplayName::configured(config, NameSource::Fallback)
        }
    }
}
