//! Server configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SHIPPING_*` environment variables or a
//! configuration file, with the accessors below supplying defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_APPLICATION_NAME: &str = "shipping-calculator";

/// Configuration values controlling the HTTP listener and metric namespace.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHIPPING")]
pub struct ServerSettings {
    /// Address the listener binds to.
    pub host: Option<IpAddr>,
    /// TCP port the listener binds to.
    pub port: Option<u16>,
    /// Service name, also used as the Prometheus namespace.
    pub application_name: Option<String>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> IpAddr {
        self.host.unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the socket address built from host and port.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host(), self.port())
    }

    /// Return the configured application name, falling back to the default.
    ///
    /// Blank values are treated as unset.
    #[must_use]
    pub fn application_name(&self) -> &str {
        self.application_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_APPLICATION_NAME)
    }

    /// Application name rewritten as a valid Prometheus namespace.
    ///
    /// Prometheus names only allow `[a-zA-Z0-9_]`, so every other character
    /// becomes `_`.
    #[must_use]
    pub fn metrics_namespace(&self) -> String {
        self.application_name()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("shipping-calculator")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SHIPPING_HOST", None::<String>),
            ("SHIPPING_PORT", None::<String>),
            ("SHIPPING_APPLICATION_NAME", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.application_name(), "shipping-calculator");
        assert_eq!(settings.metrics_namespace(), "shipping_calculator");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SHIPPING_HOST", Some("127.0.0.1".to_owned())),
            ("SHIPPING_PORT", Some("9090".to_owned())),
            ("SHIPPING_APPLICATION_NAME", Some("frete".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            "127.0.0.1:9090".parse().expect("addr")
        );
        assert_eq!(settings.application_name(), "frete");
    }

    #[rstest]
    #[case::blank(Some("   "), "shipping-calculator")]
    #[case::padded(Some(" frete "), "frete")]
    #[case::unset(None, "shipping-calculator")]
    fn application_name_ignores_blank_values(
        #[case] configured: Option<&str>,
        #[case] expected: &str,
    ) {
        let settings = ServerSettings {
            application_name: configured.map(str::to_owned),
            ..ServerSettings::default()
        };
        assert_eq!(settings.application_name(), expected);
    }
}
