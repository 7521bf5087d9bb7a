use std::{
    fs::read_to_string,
    io::Error as IoError,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
    time::Duration,
};

use crate::authorizer::Authorizer;
use serde::Deserialize;
use toml::{de::Error as TomlError, from_str};

type OptPort = Option<u16>;
type OptString = Option<String>;
type OptDuration = Option<u64>;

#[derive(Debug, Default, Deserialize)]
pub struct BridgeConfigSrc {
    pub http_port: OptPort,
    pub things_url: OptString,
    /// seconds
    pub things_timeout: OptDuration,
    pub publisher_url: OptString,
    /// seconds
    pub publisher_timeout: OptDuration,
    /// stdout, stderr, file:bridge.log
    pub log_dest: OptString,
    pub log_level: OptString,
}

impl BridgeConfigSrc {
    pub const LOG_DEST_STDOUT: &'static str = "stdout";
    pub const LOG_DEST_STDERR: &'static str = "stderr";
    pub const LOG_DEST_FILE_PREFIX: &'static str = "file:";
    pub const LOG_LEVEL: &'static [&'static str; 4] = &["error", "warn", "info", "debug"];

    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let config_file_content = read_to_string(path)?;
        Self::from_toml(config_file_content.as_str())
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config_src: BridgeConfigSrc = from_str(content)?;
        Self::validate(&config_src)?;
        Ok(config_src)
    }

    fn validate(config_src: &BridgeConfigSrc) -> ConfigResult<()> {
        Self::validate_log_dest(&config_src.log_dest)
            .and_then(|_| Self::validate_log_level(&config_src.log_level))
            .and_then(|_| Self::validate_url("things_url", &config_src.things_url))
            .and_then(|_| Self::validate_url("publisher_url", &config_src.publisher_url))
            .and_then(|_| Self::validate_timeout("things_timeout", &config_src.things_timeout))
            .and_then(|_| {
                Self::validate_timeout("publisher_timeout", &config_src.publisher_timeout)
            })
    }

    fn validate_log_dest(maybe_log_dest: &OptString) -> ConfigResult<()> {
        match maybe_log_dest {
            Some(log_dest) => {
                if log_dest == Self::LOG_DEST_STDOUT
                    || log_dest == Self::LOG_DEST_STDERR
                    || (log_dest.starts_with(Self::LOG_DEST_FILE_PREFIX)
                        && log_dest.len() > Self::LOG_DEST_FILE_PREFIX.len())
                {
                    return Ok(());
                }

                Err(BridgeConfigError::WrongValue(format!(
                    "Unsupported log destination \"{}\".\nSupported values: \"{}\", \"{}\", \"file:<path>\"",
                    log_dest,
                    Self::LOG_DEST_STDOUT,
                    Self::LOG_DEST_STDERR
                )))
            }
            None => Ok(()),
        }
    }

    fn validate_log_level(maybe_log_level: &OptString) -> ConfigResult<()> {
        match maybe_log_level {
            Some(log_level) => {
                if Self::LOG_LEVEL
                    .iter()
                    .any(|supported| supported == log_level)
                {
                    return Ok(());
                }
                Err(BridgeConfigError::WrongValue(format!(
                    "Unsupported log level {}.\nSupported values: {:?}",
                    log_level,
                    Self::LOG_LEVEL
                )))
            }
            None => Ok(()),
        }
    }

    fn validate_url(name: &str, maybe_url: &OptString) -> ConfigResult<()> {
        match maybe_url {
            Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                Err(BridgeConfigError::WrongValue(format!(
                    "{} should be an http(s) URL, got \"{}\"",
                    name, url
                )))
            }
            _ => Ok(()),
        }
    }

    fn validate_timeout(name: &str, maybe_timeout: &OptDuration) -> ConfigResult<()> {
        match maybe_timeout {
            Some(0) => Err(BridgeConfigError::WrongValue(format!(
                "{} should be at least 1 second",
                name
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub http_addr: SocketAddr,
    pub things_url: String,
    pub things_timeout: Duration,
    // if None => published messages are dropped
    pub publisher_url: OptString,
    pub publisher_timeout: Duration,
    /// stdout, stderr, file:bridge.log
    pub log_dest: String,
    pub log_level: String,
}

impl From<BridgeConfigSrc> for BridgeConfig {
    fn from(src: BridgeConfigSrc) -> Self {
        BridgeConfig {
            http_addr: local_listener(src.http_port.unwrap_or(Self::DEFAULT_HTTP_PORT)),
            things_url: src
                .things_url
                .unwrap_or_else(|| Self::DEFAULT_THINGS_URL.to_string()),
            things_timeout: Duration::from_secs(
                src.things_timeout
                    .unwrap_or(Self::DEFAULT_THINGS_TIMEOUT),
            ),
            publisher_url: src.publisher_url,
            publisher_timeout: Duration::from_secs(
                src.publisher_timeout
                    .unwrap_or(Self::DEFAULT_PUBLISHER_TIMEOUT),
            ),
            log_dest: src
                .log_dest
                .unwrap_or_else(|| Self::DEFAULT_LOG.to_string()),
            log_level: src
                .log_level
                .unwrap_or_else(|| Self::DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig::from(BridgeConfigSrc::default())
    }
}

impl BridgeConfig {
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    pub const DEFAULT_THINGS_URL: &'static str = "http://localhost:8183";
    pub const DEFAULT_THINGS_TIMEOUT: u64 = Authorizer::DEFAULT_TIMEOUT.as_secs();
    pub const DEFAULT_PUBLISHER_TIMEOUT: u64 = 1;
    pub const DEFAULT_LOG: &'static str = "stdout";
    pub const DEFAULT_LOG_LEVEL: &'static str = "info";

    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        BridgeConfigSrc::from_file(path).map(From::from)
    }
}

fn local_listener(port: u16) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), port)
}

#[derive(Debug)]
pub enum BridgeConfigError {
    ConfigFile(String),
    WrongValue(String),
}

impl From<IoError> for BridgeConfigError {
    fn from(err: IoError) -> Self {
        BridgeConfigError::ConfigFile(format!("{:?}", err))
    }
}

impl From<TomlError> for BridgeConfigError {
    fn from(err: TomlError) -> Self {
        BridgeConfigError::ConfigFile(format!("{:?}", err))
    }
}

type ConfigResult<T> = Result<T, BridgeConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BridgeConfig::default();

        assert_eq!(config.http_addr.port(), BridgeConfig::DEFAULT_HTTP_PORT);
        assert_eq!(config.things_url, BridgeConfig::DEFAULT_THINGS_URL);
        assert_eq!(config.things_timeout, Duration::from_secs(1));
        assert_eq!(config.publisher_url, None);
        assert_eq!(config.publisher_timeout, Duration::from_secs(1));
        assert_eq!(config.log_dest, "stdout");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn from_toml() {
        let src = BridgeConfigSrc::from_toml(
            r#"
            http_port = 9090
            things_url = "http://things:8183"
            things_timeout = 3
            publisher_url = "http://bus:8185/messages"
            publisher_timeout = 2
            log_dest = "file:bridge.log"
            log_level = "debug"
            "#,
        )
        .expect("should parse a valid config");
        let config = BridgeConfig::from(src);

        assert_eq!(config.http_addr.port(), 9090);
        assert_eq!(config.things_url, "http://things:8183");
        assert_eq!(config.things_timeout, Duration::from_secs(3));
        assert_eq!(config.publisher_timeout, Duration::from_secs(2));
        assert_eq!(
            config.publisher_url.as_deref(),
            Some("http://bus:8185/messages")
        );
        assert_eq!(config.log_dest, "file:bridge.log");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn wrong_values() {
        for content in &[
            r#"log_level = "trace""#,
            r#"log_dest = "syslog""#,
            r#"log_dest = "file:""#,
            r#"things_url = "things:8183""#,
            r#"publisher_url = "nats://bus:4222""#,
            r#"things_timeout = 0"#,
            r#"publisher_timeout = 0"#,
        ] {
            match BridgeConfigSrc::from_toml(content) {
                Err(BridgeConfigError::WrongValue(_)) => {}
                other => panic!("{} should be rejected, got {:?}", content, other),
            }
        }
    }

    #[test]
    fn broken_toml() {
        match BridgeConfigSrc::from_toml("http_port = ") {
            Err(BridgeConfigError::ConfigFile(_)) => {}
            other => panic!("should fail to parse, got {:?}", other),
        }
    }
}
