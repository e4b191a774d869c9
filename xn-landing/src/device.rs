use serde::Serialize;

const MOBILE_AGENTS: [&str; 3] = ["android", "iphone", "windows phone"];

/// The kind of device a page is rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Mobile,
}

impl Default for Device {
    fn default() -> Self {
        Device::Desktop
    }
}

impl Device {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let user_agent = user_agent.to_lowercase();
        if MOBILE_AGENTS.iter().any(|agent| user_agent.contains(agent)) {
            Device::Mobile
        } else {
            Device::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == Device::Mobile
    }
}
