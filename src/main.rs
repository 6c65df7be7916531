use anyhow::Context;
use clap::{ArgAction, Parser};
use rgba_mixer::config::Config;
use rgba_mixer::gui;
use rgba_mixer::model::Preset;

#[derive(Parser, Debug)]
#[command(name = "rgba-mixer")]
#[command(version, about = "Color mixer with live RGBA sliders and preset colors")]
struct Cli {
    /// Preset applied at startup (black, red, green, blue, cyan, magenta, yellow, white)
    #[arg(long, short = 'p', value_name = "NAME")]
    preset: Option<Preset>,

    /// Write the example config to ~/.config/rgba-mixer/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Print the config file location and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "init_config")]
    print_config_path: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_config_path {
        println!("{}", Config::get_config_path()?.display());
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file().context("Could not create config file")?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;
    log::info!("Starting mixer");

    gui::run(config, cli.preset).map_err(|err| anyhow::anyhow!("Mixer window failed: {err}"))?;

    log::info!("Mixer closed.");
    Ok(())
}
