use std::{env, fmt, net::SocketAddr, time::Duration};

use crate::{errors::Error, Result};

/// Token value shipped in sample configs. Treated exactly like an unset token.
pub const TOKEN_PLACEHOLDER: &str = "YOUR_TOKEN_HERE";

const DEFAULT_PLATFORM_API_BASE: &str = "https://api.rubika.ir";
const DEFAULT_PRICE_API_BASE: &str = "https://baha24.com";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Bot access token. Unset, blank and placeholder values are all "unconfigured".
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(Option<String>);

impl BotToken {
    pub fn new(raw: Option<String>) -> Self {
        let token = raw
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != TOKEN_PLACEHOLDER);
        Self(token)
    }

    /// The usable token, or `None` when the bot must not talk to the platform.
    pub fn configured(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("BotToken(<redacted>)"),
            None => f.write_str("BotToken(<unconfigured>)"),
        }
    }
}

/// Typed configuration, built once at process start and shared by every component.
#[derive(Clone, Debug)]
pub struct Config {
    // Messaging platform
    pub bot_token: BotToken,
    pub platform_api_base: String,

    // Price provider
    pub price_api_base: String,

    // Outbound HTTP
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,

    // Inbound HTTP
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load from `.env` (if present, never overriding the process env) and the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = BotToken::new(lookup("RUBIKA_BOT_TOKEN"));
        if bot_token.configured().is_none() {
            tracing::warn!("RUBIKA_BOT_TOKEN is not configured; webhook replies are disabled");
        }

        let platform_api_base = base_url(
            lookup("RUBIKA_API_BASE"),
            DEFAULT_PLATFORM_API_BASE,
            "RUBIKA_API_BASE",
        )?;
        let price_api_base = base_url(
            lookup("PRICE_API_BASE"),
            DEFAULT_PRICE_API_BASE,
            "PRICE_API_BASE",
        )?;

        let connect_timeout =
            Duration::from_millis(parse_u64(&lookup, "HTTP_CONNECT_TIMEOUT_MS")?.unwrap_or(5_000));
        let request_timeout =
            Duration::from_millis(parse_u64(&lookup, "HTTP_TIMEOUT_MS")?.unwrap_or(10_000));

        let raw_bind = lookup("BIND_ADDR")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("BIND_ADDR {raw_bind:?} is invalid: {e}")))?;

        Ok(Self {
            bot_token,
            platform_api_base,
            price_api_base,
            connect_timeout,
            request_timeout,
            user_agent: format!("pricebot/{}", env!("CARGO_PKG_VERSION")),
            bind_addr,
        })
    }
}

fn base_url(v: Option<String>, default: &str, key: &str) -> Result<String> {
    let raw = v.and_then(non_empty).unwrap_or_else(|| default.to_string());
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Config(format!(
            "{key} must be an http(s) URL, got {raw:?}"
        )));
    }
    Ok(trimmed)
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<u64>> {
    let Some(raw) = lookup(key).and_then(non_empty) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|e| Error::Config(format!("{key} {raw:?} is invalid: {e}")))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
