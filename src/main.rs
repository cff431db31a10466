use clap::{Parser, Subcommand};
use fandial::config;
use fandial::gui::app::AppModel;
use fandial::gui::dial::Dial;
use fandial::gui::theme::SpeedColors;
use fandial::labels::Labels;
use fandial::sys::runtime;
use fandial::sys::server::{self, ControlCommand};
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "fandial", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Open the dial window (the default)
    Run,
    /// Advance a running dial to its next speed
    Activate,
    /// Write the default config file if none exists and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(),
        Commands::Activate => server::send_command(ControlCommand::Activate),
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = config::load_config()?;
    let colors = SpeedColors::from_bindings(&config.colors)?;
    let labels = Labels::from_config(&config);
    let dial = Dial::new(colors);

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    let app = RelmApp::new("org.fandial.FanDial").with_args(Vec::new());

    app.run::<AppModel>((dial, labels, config.window, rx));
    Ok(())
}
