use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use version_stamp::cli::orchestration::{run_stamp_workflow, Mode, StampWorkflowArgs};
use version_stamp::{config, ui, Version};

#[derive(clap::Parser)]
#[command(
    name = "version-stamp",
    version,
    about = "Propagate a release version across build scripts, installer manifests and templates"
)]
struct Args {
    // "-1.2.3" must reach Version::parse, not be read as a short flag
    #[arg(
        value_name = "A.B.C",
        allow_hyphen_values = true,
        help = "Release version to stamp"
    )]
    release: Option<String>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Project root the target paths are relative to"
    )]
    root: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Expand the template directory instead of patching targets"
    )]
    templates: bool,

    #[arg(long, help = "Preview what would happen without writing files")]
    dry_run: bool,

    #[arg(long, help = "Check every target before writing any of them")]
    verify: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate the version before anything on disk is touched
    let Some(release) = args.release.as_deref() else {
        ui::display_usage();
        std::process::exit(1);
    };

    let version = match Version::parse(release) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            ui::display_usage();
            std::process::exit(1);
        }
    };

    let config = match config::load_config(args.config.as_deref(), &args.root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_version_change(&version);

    let workflow_args = StampWorkflowArgs {
        version,
        root: args.root,
        mode: if args.templates {
            Mode::Templates
        } else {
            Mode::Patterns
        },
        dry_run: args.dry_run,
        verify: args.verify,
    };

    run_stamp_workflow(&workflow_args, &config)
        .with_context(|| format!("Failed to stamp version {}", version))?;

    ui::display_done();
    Ok(())
}
