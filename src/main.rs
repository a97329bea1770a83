use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use furnikit::{
    export_plan, format_currency, format_dimensions, init_logging, plan, selectable_materials,
    validate_request, CadFormat, Config, DesignRequest, FurnitureType, BUILD_DATE, VERSION,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "furnikit")]
#[command(version, about = "Parametric furniture design compiler")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON or TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and price a design, printing the full plan as JSON
    Generate {
        #[arg(value_name = "REQUEST.json")]
        request: PathBuf,

        /// Write the plan here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Check a request's dimensions and counts and list every violation
    Validate {
        #[arg(value_name = "REQUEST.json")]
        request: PathBuf,
    },

    /// Export the placement geometry as a drawing
    Export {
        #[arg(value_name = "REQUEST.json")]
        request: PathBuf,

        /// dxf or svg; defaults to the configured format
        #[arg(long, short)]
        format: Option<String>,

        /// Output file; defaults to the project name in the current directory
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// List the selectable sheet materials with prices
    Materials,

    /// Show recommended dimensions for a furniture type
    Recommend {
        /// corner_shelf, wall_shelf, cabinet or desk
        #[arg(value_name = "TYPE")]
        furniture_type: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    debug!("furnikit {} (built {})", VERSION, BUILD_DATE);

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Generate { request, out } => {
            let request = read_request(&request)?;
            let plan = plan(&request, &config).context("Generation failed")?;
            let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
            write_output(out.as_deref(), &json)?;
        }
        Commands::Validate { request } => {
            let request = read_request(&request)?;
            let report = validate_request(&request);
            if !report.valid {
                for error in &report.errors {
                    println!("{}", error);
                }
                return Ok(ExitCode::from(2));
            }
            println!(
                "{} {} is valid",
                request.furniture_type.label(),
                format_dimensions(
                    request.dimensions.width,
                    request.dimensions.depth,
                    request.dimensions.height
                )
            );
        }
        Commands::Export {
            request,
            format,
            out,
        } => {
            let request = read_request(&request)?;
            let format = format
                .map(|f| f.parse::<CadFormat>())
                .transpose()
                .context("Invalid export format")?;
            let plan = plan(&request, &config).context("Generation failed")?;
            let document = export_plan(&plan, &config, format);

            let path = out.unwrap_or_else(|| PathBuf::from(&document.filename));
            fs::write(&path, &document.content)
                .with_context(|| format!("Failed to write drawing: {:?}", path))?;
            println!("{} ({})", path.display(), document.mime_type);
        }
        Commands::Materials => {
            let prices = config.price_table();
            for material in selectable_materials() {
                println!(
                    "{:<16} {:<16} {:>4}mm  {} per sheet",
                    material.id,
                    material.label,
                    material.thickness_mm,
                    format_currency(prices.material_price(material.id), config.currency())
                );
            }
        }
        Commands::Recommend { furniture_type } => {
            let furniture_type: FurnitureType = furniture_type
                .parse()
                .context("Unknown furniture type")?;
            let dims = furniture_type.recommended_dimensions();
            print!(
                "{}: {}",
                furniture_type.label(),
                format_dimensions(dims.width, dims.depth, dims.height)
            );
            match dims.corner_angle {
                Some(angle) => println!(" at {}°", angle),
                None => println!(),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_request(path: &Path) -> Result<DesignRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {:?}", path))?;
    DesignRequest::from_json(&content)
        .with_context(|| format!("Failed to parse request: {:?}", path))
}

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output: {:?}", path)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
