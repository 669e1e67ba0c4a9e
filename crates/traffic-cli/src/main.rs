//! CLI binary for requesting traffic predictions.

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};

use traffic_client::{ClientConfig, HttpPredictionClient, PredictionForm};
use traffic_types::options::{AREA_NAMES, ROAD_NAMES, WEATHER_CONDITIONS};
use traffic_types::{DayOfWeek, FormField, ResultReport, SubmitOutcome};

#[derive(Parser)]
#[command(name = "traffic", version, about = "Bangalore traffic prediction client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a prediction for one area, road, weather and day
    Predict {
        /// Area name
        #[arg(long, value_parser = PossibleValuesParser::new(AREA_NAMES))]
        area: Option<String>,

        /// Road or intersection name
        #[arg(long, value_parser = PossibleValuesParser::new(ROAD_NAMES))]
        road: Option<String>,

        /// Weather conditions
        #[arg(long, value_parser = PossibleValuesParser::new(WEATHER_CONDITIONS))]
        weather: Option<String>,

        /// Day of week, as a name or 0-6 starting at Sunday (default: Sunday)
        #[arg(long, value_parser = parse_day)]
        day: Option<DayOfWeek>,

        /// Prediction service origin (default: $TRAFFIC_API_URL or http://127.0.0.1:8000)
        #[arg(long)]
        url: Option<String>,

        /// Print the decoded prediction re-encoded as JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// List the selectable values for every field
    Options,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Predict {
            area,
            road,
            weather,
            day,
            url,
            json,
        } => {
            let selections = Selections {
                area,
                road,
                weather,
                day,
            };
            cmd_predict(selections, url.as_deref(), json).await?;
        }
        Commands::Options => cmd_options(),
    }

    Ok(())
}

fn parse_day(s: &str) -> Result<DayOfWeek, String> {
    s.parse::<DayOfWeek>().map_err(|e| e.to_string())
}

struct Selections {
    area: Option<String>,
    road: Option<String>,
    weather: Option<String>,
    day: Option<DayOfWeek>,
}

impl Selections {
    /// Fields left out on the command line stay at their empty default.
    fn apply<B: traffic_client::PredictionBackend>(
        &self,
        form: &mut PredictionForm<B>,
    ) -> anyhow::Result<()> {
        if let Some(area) = &self.area {
            form.select_field(FormField::AreaName, area)?;
        }
        if let Some(road) = &self.road {
            form.select_field(FormField::RoadName, road)?;
        }
        if let Some(weather) = &self.weather {
            form.select_field(FormField::WeatherConditions, weather)?;
        }
        if let Some(day) = self.day {
            form.select_option(FormField::DayOfWeek, usize::from(day.index()))?;
        }
        Ok(())
    }
}

async fn cmd_predict(selections: Selections, url: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = match url {
        Some(u) => ClientConfig::parse(u)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(url = %config.predict_url(), "Using prediction service");

    let mut form = PredictionForm::new(HttpPredictionClient::new(config));
    selections.apply(&mut form)?;

    match form.submit().await {
        SubmitOutcome::Updated => {}
        SubmitOutcome::Failed | SubmitOutcome::Busy => {
            // Details were already logged by the form.
            std::process::exit(1);
        }
    }

    let Some(prediction) = form.state().result() else {
        anyhow::bail!("prediction missing after a successful submit");
    };
    if json {
        println!("{}", serde_json::to_string_pretty(prediction)?);
    } else {
        print!("{}", ResultReport::new(prediction));
    }
    Ok(())
}

fn cmd_options() {
    for field in FormField::ALL {
        println!("{} ({}):", field.placeholder(), field.key());
        for (i, value) in field.options().iter().enumerate() {
            if field == FormField::DayOfWeek {
                println!("  {}  {}", i, value);
            } else {
                println!("  {}", value);
            }
        }
        println!();
    }
}
