//! Bot configuration
//!
//! Loads configuration from environment variables

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use booking_core::config::CoreConfig;
use url::Url;

/// Port the webhook listener binds to when `PORT` is not set
pub const DEFAULT_WEBHOOK_PORT: u16 = 8000;

/// How updates reach the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Long polling (`getUpdates`)
    Polling,

    /// Telegram pushes updates to `url`; the listener binds `addr`
    Webhook { url: Url, addr: SocketAddr },
}

impl Transport {
    /// Pick the transport from raw `WEBHOOK_URL` / `PORT` values
    pub fn from_parts(webhook_url: Option<&str>, port: Option<&str>) -> Result<Self> {
        let Some(raw_url) = webhook_url.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::Polling);
        };

        let url = Url::parse(raw_url).context("WEBHOOK_URL must be a valid URL")?;

        let port = match port {
            Some(p) => p.trim().parse().context("PORT must be a valid port number")?,
            None => DEFAULT_WEBHOOK_PORT,
        };

        Ok(Self::Webhook {
            url,
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Token and calendar settings
    pub core: CoreConfig,

    /// Update delivery
    pub transport: Transport,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let core = CoreConfig::from_env()?;

        let webhook_url = std::env::var("WEBHOOK_URL").ok();
        let port = std::env::var("PORT").ok();
        let transport = Transport::from_parts(webhook_url.as_deref(), port.as_deref())?;

        Ok(Self { core, transport })
    }
}
