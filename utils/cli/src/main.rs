use clap::Parser;
use ledivilkku_core::Configuration;

/// LED matrix animation encoder
///
/// Converts the animation frames `0001.png` ... `0019.png` from the working
/// directory into command strings for the 16x16 LED matrix firmware and
/// prints them as string literals ready to be pasted into the firmware sources.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let _cli = Cli::parse();
    let config = Configuration::default();
    log::info!(
        "Converting {} images, grid {}x{}, threshold {}",
        config.image_names.len(),
        config.side_len,
        config.side_len,
        config.set_led_threshold
    );

    let stdout = std::io::stdout();
    ledivilkku_cli::run(".", &config, &mut stdout.lock())
}
