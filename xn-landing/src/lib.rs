//! A DOM-free model of the "name.我爱你" landing page.
//!
//! The page reads its own host name, decodes the leading `xn--` label back
//! into the Unicode name it was registered for, and personalizes itself from
//! that name: title and link text, background images, music, analytics and
//! slideshow settings. This crate computes all of those values so they can
//! be rendered, inspected or tested without a browser.
//!
//! ```ignore
//! let config = xn_landing::Config::default();
//! let page = xn_landing::Page::for_url("http://xn--r8s482g.xn--6qq986b3xl/", None, &config);
//! assert_eq!(page.title, "孙芮我爱你");
//! ```
mod config;
mod device;
mod error;
pub mod name;
mod page;
pub mod toc;

pub use crate::config::{Config, Profile};
pub use crate::device::Device;
pub use crate::error::{Error, Result};
pub use crate::name::{DisplayName, NameSource};
pub use crate::page::{encode_uri, Music, Page, Slideshow};
