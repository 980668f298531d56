use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tour_views::resolver::LogObserver;
use tour_views::TourConfig;

#[derive(Parser)]
#[command(name = "tour-views")]
#[command(about = "Compute per-link entry views for exported panorama tours", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Identifier the tour literal is assigned to in data.js
    #[arg(long, global = true, default_value = tour_views::data_script::APP_DATA_IDENT)]
    ident: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare an extracted tour: annotate entry angles, write view_config.json and tour_data.json
    Init {
        /// Extracted tour directory (containing app-files/)
        tour_dir: PathBuf,
    },
    /// Regenerate app-files/data.js from an edited tour JSON document
    Build {
        /// Edited tour JSON file
        config: PathBuf,

        /// Tour directory (defaults to the directory containing app-files/ next to the config)
        #[arg(short, long)]
        tour_dir: Option<PathBuf>,
    },
    /// Resolve entry views for a single data.js
    Resolve {
        /// Input data.js path
        input: PathBuf,

        /// Output view configuration path
        #[arg(short, long, default_value = "view_config.json")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let result = match cli.command {
        Commands::Init { tour_dir } => {
            let config = TourConfig {
                script_ident: cli.ident,
                ..TourConfig::for_dir(tour_dir)
            };
            tour_views::init_tour(&config, &mut LogObserver).map(|r| {
                if !cli.quiet {
                    eprintln!(
                        "Success: {} scenes, {} links -> {} entry views ({})",
                        r.scene_count,
                        r.link_count,
                        r.view_entries,
                        r.view_config_path.display()
                    );
                }
            })
        }
        Commands::Build { config, tour_dir } => {
            let base = TourConfig {
                script_ident: cli.ident,
                ..TourConfig::default()
            };
            let tour_dir = match tour_dir {
                Some(dir) => Ok(dir),
                None => tour_views::locate_tour_dir(&base, &config),
            };
            tour_dir
                .and_then(|dir| {
                    let tour = TourConfig {
                        tour_dir: dir,
                        ..base
                    };
                    tour_views::build_tour(&tour, &config)
                })
                .map(|path| {
                    if !cli.quiet {
                        eprintln!("Success: data.js generated at {}", path.display());
                    }
                })
        }
        Commands::Resolve { input, output } => {
            tour_views::resolve_file(&input, &output, &cli.ident, &mut LogObserver).map(|v| {
                if !cli.quiet {
                    eprintln!(
                        "Success: {} scenes, {} entry views -> {}",
                        v.len(),
                        v.entry_count(),
                        output.display()
                    );
                }
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
