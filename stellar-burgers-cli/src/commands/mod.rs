//! CLI command implementations

pub mod config;
pub mod delete;
pub mod ingredients;
pub mod login;
pub mod order;
pub mod orders;
pub mod register;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use stellar_burgers_core::{ApiClients, Config, ResponseHandle};

use crate::output;

pub const SETTINGS_DIR_ENV: &str = "STELLAR_BURGERS_DIR";

/// Get the settings directory from environment or default
pub fn get_settings_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(SETTINGS_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".stellar-burgers"))
        .context("Could not find home directory; set STELLAR_BURGERS_DIR")
}

/// Resolved configuration plus the clients built from it
pub struct Connection {
    pub settings_dir: PathBuf,
    pub api: ApiClients,
}

impl Connection {
    pub fn open(base_url: Option<&str>, verbose: bool) -> Result<Self> {
        let settings_dir = get_settings_dir()?;
        let config = load_config(&settings_dir, base_url, verbose)?;
        let api = ApiClients::new(config).context("Failed to build HTTP client")?;
        Ok(Self { settings_dir, api })
    }
}

fn load_config(
    settings_dir: &std::path::Path,
    base_url: Option<&str>,
    verbose: bool,
) -> Result<Config> {
    let mut config = Config::load(settings_dir)
        .with_context(|| format!("Failed to load settings from {:?}", settings_dir))?;
    if let Some(url) = base_url {
        config = config.with_base_url(url)?;
    }
    if verbose {
        config = config.with_body_logging(true, true);
    }
    Ok(config)
}

/// Print `response` and turn a non-2xx status into an error
///
/// With `json` the body is printed as-is; otherwise `render` handles the
/// success case and failures print the server message.
pub fn finish<F>(response: &ResponseHandle, json: bool, render: F) -> Result<()>
where
    F: FnOnce(&ResponseHandle) -> Result<()>,
{
    if json {
        output::print_body(response);
    } else if response.status().is_success() {
        render(response)?;
    } else {
        println!("{}", output::status_line(response));
        match response.extract::<String>("message").ok().flatten() {
            Some(message) => output::warning(&message),
            None => println!("{}", response.body_text()),
        }
    }

    if !response.status().is_success() {
        bail!("Server answered {}", response.status_code());
    }
    Ok(())
}
