use clap::{Parser, Subcommand, ValueEnum};
use solaredge_cli::render::EnergyMode;
use solaredge_cli::settings::{self, DEFAULT_CONFIG_PATH};
use solaredge_cli::Error;

/// A tool to collect and display data from SolarEdge
#[derive(Parser, Debug)]
#[command(name = "solaredge-cli", version, about, long_about = None)]
struct Cli {
    /// Filepath to the config file containing site ID and API key
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Displays the inventory of the site equipment
    Inventory,
    /// Displays the energy production of the site over a period of time
    Energy {
        /// The start date for reporting energy production (YYYY-MM-DD); defaults to one month ago
        #[arg(long)]
        start: Option<String>,
        /// The end date for reporting energy production (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end: Option<String>,
        /// Site totals per day, or a table broken down per meter
        #[arg(short, long, value_enum, default_value_t = Mode::Simple)]
        mode: Mode,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Simple,
    Detailed,
}

impl From<Mode> for EnergyMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Simple => EnergyMode::Simple,
            Mode::Detailed => EnergyMode::Detailed,
        }
    }
}

async fn run(cli: Cli) -> Result<String, Error> {
    let config = settings::read_settings(&cli.config)?;
    let api = solaredge_cli::connect(config)?;

    match cli.command.unwrap_or(Command::Inventory) {
        Command::Inventory => solaredge_cli::inventory_report(&api).await,
        Command::Energy { start, end, mode } => {
            let today = chrono::Local::now().date_naive();
            solaredge_cli::energy_report(
                &api,
                start.as_deref(),
                end.as_deref(),
                mode.into(),
                today,
            )
            .await
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => print!("{}", output),
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
