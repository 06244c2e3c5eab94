//! Wireframe first-person view of the built-in map.
//!
//! Controls  W/S = forward/back  A/D = strafe  ,/. = turn
//!           Shift+W/S = look up/down  M+W/S = rise/sink  Esc = quit
//!
//! ```bash
//! cargo run --release -- --width 720 --height 360 --scale 2
//! ```

use clap::Parser;
use tracing::info;

use wiredoom::{config::Config, host, session::Session, world::Map};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = Config::parse();
    cfg.validate()?;
    info!(?cfg, "starting view_wire v{}", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(&cfg, Map::demo());
    host::run("Wireframe Renderer", &cfg, &mut session)?;
    Ok(())
}
