//! The personalized page model.
use crate::name::{self, DisplayName, NameSource};
use crate::{Config, Device};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The characters JavaScript's `encodeURI` leaves alone, besides alphanumerics.
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Percent-encode `input` the way a browser's `encodeURI` does.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI).to_string()
}

/// Full-page slideshow settings.
///
/// `rotate_from` applies to desktop browsers only; mobile pages slide in
/// without rotating.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Slideshow {
    pub slide_time_ms: u32,
    pub continuous: bool,
    pub translate: String,
    pub scale: [f64; 2],
    pub rotate: [u32; 2],
    pub opacity: [f64; 2],
    pub mode: String,
    pub easing: String,
}

impl Default for Slideshow {
    fn default() -> Self {
        Slideshow {
            slide_time_ms: 800,
            continuous: true,
            translate: "Y".to_owned(),
            scale: [0.1, 1.0],
            rotate: [270, 0],
            opacity: [0.0, 1.0],
            mode: "wheel,touch,nav:navBar".to_owned(),
            easing: "ease".to_owned(),
        }
    }
}

impl Slideshow {
    fn for_device(&self, device: Device) -> Slideshow {
        let mut slideshow = self.clone();
        if device.is_mobile() {
            slideshow.rotate[0] = 0;
        }
        slideshow
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Music {
    pub url: String,
    pub looped: bool,
}

/// Every value the page writes into its document.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Page {
    pub name: String,
    pub name_source: NameSource,
    pub device: Device,
    pub title: String,
    pub domain: String,
    pub link: String,
    pub trade_link: String,
    pub sample_name: String,
    pub sample_signature: String,
    pub slug: String,
    pub images: Vec<String>,
    pub stylesheet: String,
    pub music: Music,
    pub analytics: Option<String>,
    pub slideshow: Slideshow,
}

impl Page {
    /// Resolve the display name from `href` and build its page.
    pub fn for_url(href: &str, user_agent: Option<&str>, config: &Config) -> Page {
        let name = name::resolve(href, config);
        let device = user_agent.map_or_else(Device::default, Device::from_user_agent);
        Page::build(&name, device, config)
    }

    pub fn build(name: &DisplayName, device: Device, config: &Config) -> Page {
        let base = config.asset_base.trim_end_matches('/');
        let slug = config.slug_for(&name.name).to_owned();
        let domain = format!("{}.{}", name.name, config.domain_suffix);

        let images: Vec<String> = (1..=config.pages)
            .map(|page| format!("{}/{}/{}.jpg", base, slug, page))
            .collect();
        let stylesheet = images
            .iter()
            .zip(1..)
            .map(|(image, page)| format!(".page{}{{background-image:url({});}}", page, image))
            .collect();
        let analytics = config
            .analytics_id_for(&name.name)
            .map(|site_id| format!("{}{}", config.analytics_url, site_id));
        debug!(
            name = %name.name,
            %slug,
            analytics = analytics.is_some(),
            ?device,
            "built page"
        );

        Page {
            name: name.name.clone(),
            name_source: name.source,
            device,
            title: format!("{}{}", name.name, config.domain_suffix),
            link: format!("http://{}", domain),
            trade_link: format!("{}{}", config.trade_url, encode_uri(&domain)),
            domain,
            sample_name: config.sample_name.clone(),
            sample_signature: format!("--{}宣", config.sample_name),
            slug,
            images,
            stylesheet,
            music: Music {
                url: format!("{}/{}", base, config.music),
                looped: true,
            },
            analytics,
            slideshow: config.slideshow.for_device(device),
        }
    }
}
