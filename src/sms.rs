//! Hand-off to the platform's SMS composer through an `sms:` URI.
//!
//! The composer is launched fire-and-forget: once the URI has been handed to
//! the OS there is no signal telling us whether the message actually went out.

use crate::api::models::Vendor;
use crate::error::Result;
use crate::utils::digits_only;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsHandoff {
    /// Digit-only numbers, in selection order.
    pub recipients: Vec<String>,
    pub body: String,
    pub delimiter: String,
}

impl SmsHandoff {
    pub fn new<'a>(vendors: impl IntoIterator<Item = &'a Vendor>, body: &str, delimiter: &str) -> Self {
        Self {
            recipients: vendors.into_iter().map(|v| digits_only(&v.phone_number)).collect(),
            body: body.to_string(),
            delimiter: delimiter.to_string(),
        }
    }

    pub fn uri(&self) -> String {
        format!(
            "sms:{}?body={}",
            self.recipients.join(&self.delimiter),
            encode_component(&self.body)
        )
    }
}

/// Percent-encode like JavaScript's `encodeURIComponent`, which also leaves
/// `!'()*` as they are.
fn encode_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Opens a composed SMS in whatever app the platform uses for `sms:` links.
pub trait SmsLauncher {
    fn launch(&self, handoff: &SmsHandoff) -> Result<()>;
}

#[cfg(feature = "gui")]
pub struct DesktopLauncher;

#[cfg(feature = "gui")]
impl SmsLauncher for DesktopLauncher {
    fn launch(&self, handoff: &SmsHandoff) -> Result<()> {
        use gtk4::gio;
        let uri = handoff.uri();
        log::info!("Opening SMS composer for {} recipient(s)", handoff.recipients.len());
        gio::AppInfo::launch_default_for_uri(&uri, None::<&gio::AppLaunchContext>)
            .map_err(|e| crate::error::DashboardError::Handoff(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Role;

    #[test]
    fn uri_joins_digits_and_encodes_body() {
        let a = Vendor::new(1, "A", Role::Plumber, "+1 (234) 567-890");
        let b = Vendor::new(2, "B", Role::Cleaner, "+1.987.654.321");
        let h = SmsHandoff::new([&b, &a], "Hi & welcome, 50% off?", ";");
        assert_eq!(h.recipients, vec!["1987654321", "1234567890"]);
        assert_eq!(
            h.uri(),
            "sms:1987654321;1234567890?body=Hi%20%26%20welcome%2C%2050%25%20off%3F"
        );
    }

    #[test]
    fn body_keeps_component_safe_marks() {
        let a = Vendor::new(1, "A", Role::Plumber, "+111");
        let h = SmsHandoff::new([&a], "Done (finally)! It's *fixed* ~ok_-.", ";");
        assert_eq!(
            h.uri(),
            "sms:111?body=Done%20(finally)!%20It's%20*fixed*%20~ok_-."
        );
    }

    #[test]
    fn delimiter_is_configurable() {
        let a = Vendor::new(1, "A", Role::Plumber, "+111");
        let b = Vendor::new(2, "B", Role::Plumber, "+222");
        let h = SmsHandoff::new([&a, &b], "x", ",");
        assert_eq!(h.uri(), "sms:111,222?body=x");
    }
}
