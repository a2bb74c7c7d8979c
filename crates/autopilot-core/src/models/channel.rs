//! Distribution channels a survey can be delivered through.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of distribution channels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Survey link sent by email
    Email,

    /// Shareable survey link
    Link,

    /// Printable QR code
    Qr,
}

impl Channel {
    /// Every recognized channel.
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Link, Channel::Qr];

    /// Wire representation used in plan definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Link => "link",
            Channel::Qr => "qr",
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "link" => Ok(Channel::Link),
            "qr" => Ok(Channel::Qr),
            _ => Err(format!("Invalid distribution channel: {s}")),
        }
    }
}
