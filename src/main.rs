use std::path::Path;

use anyhow::Result;
use clap::Parser;

use version_stamp::{config, doxygen, rewrite, ui};

#[derive(clap::Parser)]
#[command(
    name = "version-stamp",
    about = "Increment the build counter in a version source file"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Version source file (overrides configuration)")]
    file: Option<String>,

    #[arg(short, long, help = "Print the current version without bumping")]
    query: bool,

    #[arg(long, help = "Preview what would change without writing")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-stamp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let source = args.file.clone().unwrap_or_else(|| config.source_file.clone());
    let source_path = Path::new(&source);
    let policy = config.behavior.on_missing_field;

    if args.query {
        let (fields, warnings) = match rewrite::read_fields(source_path, &config.labels, policy) {
            Ok(result) => result,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };

        for warning in &warnings {
            ui::display_warning(warning);
        }
        println!("{}", fields.compose());
        return Ok(());
    }

    if args.dry_run {
        let (current, warnings) = match rewrite::read_fields(source_path, &config.labels, policy) {
            Ok(result) => result,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };

        for warning in &warnings {
            ui::display_warning(warning);
        }

        let next = current.with_build(current.build + 1);
        ui::display_proposed_version(Some(&current.compose()), &next.compose());
        ui::display_status(&format!("Would rewrite {}", source));
        if config.doxygen.enabled {
            ui::display_status(&format!("Would rewrite {}", config.doxygen.path));
        }
        return Ok(());
    }

    // Bump the build counter and rewrite the source file
    let outcome = match rewrite::bump_and_rewrite(source_path, &config.labels, policy) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        ui::display_warning(warning);
    }

    if config.doxygen.enabled {
        if let Err(e) =
            doxygen::write_project_number(Path::new(&config.doxygen.path), &outcome.composed)
        {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    // The composed version on stdout is the machine-readable success signal
    println!("{}", outcome.composed);

    Ok(())
}
