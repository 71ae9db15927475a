//! livesine - play the sine generator through the default output device
//!
//! Run with: cargo run --bin livesine [frequency-hz] [unbounded|wrapped]

mod app;
mod ui;

use app::LiveSineApp;
use color_eyre::eyre::{eyre, WrapErr};
use live_sine::{PhaseMode, DEFAULT_FREQUENCY};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);

    let frequency = match args.next() {
        Some(arg) => arg
            .parse::<f64>()
            .wrap_err_with(|| format!("invalid frequency {arg:?}"))?,
        None => DEFAULT_FREQUENCY,
    };

    let phase_mode = match args.next().as_deref() {
        None | Some("unbounded") => PhaseMode::Unbounded,
        Some("wrapped") => PhaseMode::Wrapped,
        Some(other) => return Err(eyre!("unknown phase mode {other:?}")),
    };

    LiveSineApp::new()
        .frequency(frequency)
        .phase_mode(phase_mode)
        .run()
}
