use crate::app::build_app;
use crate::cfg::Config;
use crate::credentials::CredentialStore;
use crate::state::State;
use anyhow::{bail, Result};
use sessionauth::SigningKey;
use tracing::{info, warn, Level};

//--------------------------------------------------------------------------------------------------

mod app;
mod cfg;
mod credentials;
mod handlers;
mod response;
mod state;
mod types;


//--------------------------------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let cfg: Config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::File::with_name("config.local").required(false))
        .add_source(config::Environment::with_prefix("SESSIONAUTH").separator("__"))
        .build()?
        .try_deserialize()?;

    // Initialize tracing
    let mut fmt_sub = tracing_subscriber::fmt();
    if cfg.debug {
        fmt_sub = fmt_sub.with_max_level(Level::DEBUG);
    } else {
        fmt_sub = fmt_sub.with_max_level(Level::INFO);
    }
    fmt_sub.init();

    // The key is loaded once, changing it invalidates every outstanding token
    if cfg.signing_secret.is_empty() {
        bail!("signing_secret must not be empty");
    }
    let signing_key = SigningKey::from_secret(cfg.signing_secret.as_bytes());

    let credentials = CredentialStore::from_entries(&cfg.users)?;
    info!("Loaded {} identities", credentials.len());

    if cfg.development {
        warn!("Development mode - internal error detail is returned to callers");
    }

    // Create state
    let state = State::new(credentials, signing_key, cfg.development);

    // Setup the API
    let app = build_app(state.into());

    // Run the API
    let bind_addr = format!("0.0.0.0:{}", cfg.http_port.unwrap_or(3000));
    info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//--------------------------------------------------------------------------------------------------
