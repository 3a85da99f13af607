use std::{env, str::FromStr};

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use url::Url;

use crate::{Error, Result};

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub frontend_url: Option<String>,
    pub production: bool,
}

impl Config {
    /// Reads the process environment. A missing `DATABASE_URL` is fatal.
    pub fn init() -> Result<Config> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| Error::Config("DATABASE_URL não definida".to_string()))?;

        let port = match var("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| Error::Config(format!("PORT inválida: {}", port)))?,
            None => 3001,
        };

        let max_connections = var("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Ok(Config {
            database_url,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            max_connections,
            frontend_url: var("FRONTEND_URL"),
            production: var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection options with the TLS mode picked by [`ssl_mode_for`].
    pub fn pg_connect_options(&self) -> Result<PgConnectOptions> {
        let (url, sslmode) = split_sslmode(&self.database_url)?;
        let host = url.host_str().unwrap_or_default().to_string();

        let options = PgConnectOptions::from_str(url.as_str())
            .map_err(|e| Error::Config(format!("DATABASE_URL inválida: {}", e)))?;

        let mode = ssl_mode_for(&host, sslmode.as_deref());
        Ok(options.ssl_mode(mode))
    }
}

/// Takes `sslmode` out of the query string (decoded), so that values sqlx
/// does not understand (`false`) never reach its parser.
fn split_sslmode(database_url: &str) -> Result<(Url, Option<String>)> {
    let mut url = Url::parse(database_url)
        .map_err(|e| Error::Config(format!("DATABASE_URL inválida: {}", e)))?;

    let mut sslmode = None;
    let rest: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(key, value)| {
            if key == "sslmode" {
                sslmode = Some(value.into_owned());
                None
            } else {
                Some((key.into_owned(), value.into_owned()))
            }
        })
        .collect();

    url.set_fragment(None);
    url.set_query(None);
    if !rest.is_empty() {
        url.query_pairs_mut().extend_pairs(rest);
    }

    Ok((url, sslmode))
}

/// TLS is on when explicitly required, or when the host is remote and TLS
/// was not explicitly turned off. Certificates are never verified.
pub fn ssl_mode_for(host: &str, sslmode: Option<&str>) -> PgSslMode {
    let is_local = LOCAL_HOSTS.contains(&host) || host.ends_with(".local");
    let use_ssl = sslmode == Some("require")
        || (!matches!(sslmode, Some("disable") | Some("false")) && !is_local);

    if use_ssl {
        PgSslMode::Require
    } else {
        PgSslMode::Disable
    }
}
