//! Formgate - Entry Point
//!
//! A terminal login/sign-up form with client-side style validation,
//! submission rate limiting, and a rotating fact panel.

use env_logger;
use log::{info, warn};

use formgate::Surface;
use formgate::config::FormConfig;
use formgate::error::handlers::handle_error;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching form surface...");

    let config = match FormConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e.into());
            warn!("Falling back to built-in configuration defaults");
            FormConfig::default()
        }
    };

    let mut surface = Surface::new(config);
    surface.run().await;
}
