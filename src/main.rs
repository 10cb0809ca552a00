use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromakit::assets::AssetLoader;
use chromakit::commands::{render, App, Report};
use chromakit::models::OutputFormat;

#[derive(Parser)]
#[command(name = "chromakit")]
#[command(about = "OKLCH conversions, gamut mapping and pigment mixing")]
#[command(version)]
struct Cli {
    /// Output format (overrides output.format in config)
    #[arg(long, global = true, value_enum)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every color space
    Convert {
        /// Color: #hex, oklch(L C H [/ A]) or lab(L a b [/ A])
        color: String,
    },
    /// Map a color into the sRGB gamut by reducing chroma
    Gamut {
        /// Color: #hex, oklch(L C H [/ A]) or lab(L a b [/ A])
        color: String,
    },
    /// Mix colors like paint (requires a pigment table)
    Mix {
        /// Two or more colors
        #[arg(required = true, num_args = 2..)]
        colors: Vec<String>,

        /// Position between the first and second color (two colors only)
        #[arg(short, long, conflicts_with = "weights")]
        t: Option<f64>,

        /// Comma-separated weight per color (e.g. "1,2,1")
        #[arg(short, long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,
    },
    /// Interpolate between two colors in OKLCH
    Lerp {
        from: String,
        to: String,

        /// Position between the colors
        #[arg(short, long, default_value_t = 0.5)]
        t: f64,

        /// Emit an evenly spaced gradient instead of a single color
        #[arg(short, long)]
        steps: Option<usize>,
    },
    /// Perceptual difference between two colors
    Delta { a: String, b: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromakit=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let app = App::from_loader(AssetLoader::from_env())?;
    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(app.config().output.format);

    match cli.command {
        Some(Commands::Convert { color }) => print(&app.convert(&color)?, format),
        Some(Commands::Gamut { color }) => print(&app.gamut(&color)?, format),
        Some(Commands::Mix { colors, t, weights }) => {
            print(&app.mix(&colors, t, weights.as_deref())?, format)
        }
        Some(Commands::Lerp { from, to, t, steps }) => {
            print(&app.lerp(&from, &to, t, steps)?, format)
        }
        Some(Commands::Delta { a, b }) => print(&app.delta(&a, &b)?, format),
        None => run_status_command(&app, format),
    }
}

fn print<R: Report>(report: &R, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render(report, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command(app: &App, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print(&app.status(), format);
    }

    let config_file = std::env::var("CONFIG_FILE").ok();
    let pigment_lut = std::env::var("PIGMENT_LUT").ok();

    println!("Chromakit v{}", env!("CARGO_PKG_VERSION"));
    println!("OKLCH conversions, gamut mapping and pigment mixing\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PIGMENT_LUT = {}",
        pigment_lut.as_deref().unwrap_or("(not set)")
    );

    println!("\nSettings:");
    for (label, value) in app.status().rows().into_iter().skip(1) {
        println!("  {label:<12} {value}");
    }

    println!("\nRun 'chromakit --help' for commands.");
    Ok(())
}
