mod commands;
mod logging;
mod progress;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, OutputFormat, ProductArg, ShareCommand, ViewArg};
use dotenv::dotenv;
use moldmatch_core::model::ProductType;
use moldmatch_core::render::{export, terminal, TableOptions};
use moldmatch_core::share;
use moldmatch_core::{AppConfig, ComparisonEngine, ComparisonResult};
use progress::CliReporter;
use tracing::{error, info, warn};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> CliResult<()> {
    dotenv().ok();

    let args = Cli::parse();
    let _guard = logging::init_logger(args.verbose);

    let config = match moldmatch_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let outcome = match args.command {
        Some(Commands::Compare {
            file,
            view,
            format,
            output,
            no_share,
            product,
            manufacturers,
            only,
        }) => {
            let request = CompareRequest {
                file,
                view,
                format,
                output,
                no_share,
                product,
                options: table_options(&config, manufacturers, only),
            };
            run_compare(&config, request)
        }
        Some(Commands::Share(command)) => run_share(&config, command),
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
            Ok(())
        }
        Some(Commands::TruncateDb) => run_truncate_db(&config),
        None => {
            let _ = Cli::command().print_long_help();
            Ok(())
        }
    };

    if let Err(err) = outcome {
        error!("Error: {}", err);
        process::exit(1);
    }

    Ok(())
}

struct CompareRequest {
    file: PathBuf,
    view: ViewArg,
    format: OutputFormat,
    output: Option<PathBuf>,
    no_share: bool,
    product: Option<ProductArg>,
    options: TableOptions,
}

fn table_options(config: &AppConfig, manufacturers: Vec<String>, only: bool) -> TableOptions {
    let order = if manufacturers.is_empty() {
        config.manufacturer_order.clone()
    } else {
        moldmatch_core::config::distinct_manufacturers(manufacturers)
    };
    TableOptions {
        manufacturer_order: order,
        only_listed: only,
    }
}

fn run_compare(config: &AppConfig, request: CompareRequest) -> CliResult<()> {
    let mut config = config.clone();
    if request.no_share {
        config.auto_share = false;
    }

    let engine = ComparisonEngine::new(config);
    let reporter = CliReporter::new();
    let run = engine.run(&request.file, &reporter)?;

    let result = match request.view {
        ViewArg::Representative => &run.views.representative,
        ViewArg::Entire => &run.views.entire,
    };
    let product = request.product.map(product_type);
    let rendered = render(result, product, request.format, &request.options)?;
    emit(&rendered, request.output.as_deref())?;

    eprintln!();
    info!(
        "Read: {}, Compare: {}, Share: {}",
        format!("{:.2}s", run.load_duration.as_secs_f64()).green(),
        format!("{:.2}s", run.compare_duration.as_secs_f64()).green(),
        format!("{:.2}s", run.share_duration.as_secs_f64()).green(),
    );
    info!(
        "{} machines, {} hydraulic groups, {} electric groups ({} view)",
        format!("{}", run.machines_read).cyan(),
        format!("{}", result.hydraulic.len()).cyan(),
        format!("{}", result.electric.len()).cyan(),
        match request.view {
            ViewArg::Representative => "representative",
            ViewArg::Entire => "entire",
        },
    );

    match &run.share {
        Some(record) => eprintln!("Share this comparison: {}", engine.share_url(record).bold()),
        None if engine.config().auto_share => warn!("Share link is not available for this comparison"),
        None => {}
    }

    Ok(())
}

fn run_share(config: &AppConfig, command: ShareCommand) -> CliResult<()> {
    let engine = ComparisonEngine::new(config.clone());
    match command {
        ShareCommand::Show { share_id, format } => {
            let result = engine.open_shared(&share_id)?;
            let options = TableOptions {
                manufacturer_order: config.manufacturer_order.clone(),
                only_listed: false,
            };
            let rendered = render(&result, None, format, &options)?;
            emit(&rendered, None)?;
        }
        ShareCommand::List { offset, limit } => {
            let db = engine.open_database()?;
            let (results, total) = db.list_comparison_results(offset, limit)?;
            for shared in &results {
                println!(
                    "{}  {}  {} hydraulic / {} electric groups, {} machines",
                    shared.share_id.bold(),
                    shared.created_at,
                    shared.hydraulic_groups,
                    shared.electric_groups,
                    shared.machine_count,
                );
            }
            info!("{} of {} shared comparisons", results.len(), total);
        }
        ShareCommand::Delete { share_id } => {
            let share_id = share::canonical_share_id(&share_id).unwrap_or(share_id);
            let db = engine.open_database()?;
            if db.delete_comparison_result(&share_id)? {
                println!("Deleted {}", share_id);
            } else {
                warn!("No shared comparison {}", share_id);
            }
        }
    }
    Ok(())
}

fn run_truncate_db(config: &AppConfig) -> CliResult<()> {
    match prompt_confirm(
        "Are you SURE you want to delete ALL shared comparisons?",
        Some(false),
    ) {
        Ok(true) => {
            let db = ComparisonEngine::new(config.clone()).open_database()?;
            db.truncate_all()?;
            println!("All tables truncated");
            Ok(())
        }
        _ => process::exit(0),
    }
}

fn product_type(arg: ProductArg) -> ProductType {
    match arg {
        ProductArg::Hydraulic => ProductType::Hydraulic,
        ProductArg::Electric => ProductType::Electric,
    }
}

/// A copy of the result with only one product family kept.
fn only_product(result: &ComparisonResult, product: ProductType) -> ComparisonResult {
    match product {
        ProductType::Hydraulic => ComparisonResult {
            hydraulic: result.hydraulic.clone(),
            electric: Vec::new(),
        },
        ProductType::Electric => ComparisonResult {
            hydraulic: Vec::new(),
            electric: result.electric.clone(),
        },
    }
}

fn render(
    result: &ComparisonResult,
    product: Option<ProductType>,
    format: OutputFormat,
    options: &TableOptions,
) -> CliResult<String> {
    let rendered = match (format, product) {
        (OutputFormat::Table, Some(product)) => {
            terminal::render_groups(result.groups(product), product, options)
        }
        (OutputFormat::Table, None) => terminal::render_result(result, options),
        (OutputFormat::Json, Some(product)) => {
            serde_json::to_string_pretty(&only_product(result, product))?
        }
        (OutputFormat::Json, None) => serde_json::to_string_pretty(result)?,
        (OutputFormat::Csv, product) => {
            let mut out = Vec::new();
            match product {
                Some(product) => export::write_csv(&only_product(result, product), &mut out)?,
                None => export::write_csv(result, &mut out)?,
            };
            String::from_utf8(out)?
        }
    };
    Ok(rendered)
}

fn emit(rendered: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
