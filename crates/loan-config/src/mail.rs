//! Outbound mail relay configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "smtp.example.com".to_string()
}

const fn default_port() -> u16 {
    587
}

const fn default_starttls() -> bool {
    true
}

fn default_sender() -> String {
    "loans@example.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP relay host.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upgrade the connection with STARTTLS before authenticating.
    #[serde(default = "default_starttls")]
    pub starttls: bool,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// `From:` address on status notifications.
    #[serde(default = "default_sender")]
    pub default_sender: String,

    /// Transport timeout for a single delivery attempt, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            starttls: default_starttls(),
            username: String::new(),
            password: String::new(),
            default_sender: default_sender(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// Check if the relay has the minimum required fields for delivery.
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.username.is_empty()
    }

    /// Copy with the password masked, for printing.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let password = if self.password.is_empty() {
            String::new()
        } else {
            "********".to_string()
        };
        Self {
            password,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = MailConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 587);
        assert!(config.starttls);
        assert_eq!(config.default_sender, "loans@example.com");
    }

    #[test]
    fn configured_when_host_and_username_set() {
        let config = MailConfig {
            username: "relay-user".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn redacted_masks_password_only() {
        let config = MailConfig {
            username: "relay-user".into(),
            password: "hunter2".into(),
            ..Default::default()
        };
        let shown = config.redacted();
        assert_eq!(shown.password, "********");
        assert_eq!(shown.username, "relay-user");
        assert!(MailConfig::default().redacted().password.is_empty());
    }
}
