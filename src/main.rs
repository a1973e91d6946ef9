use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use module_compat::config::ShellConfig;
use module_compat::manifest::{ModuleManifest, ModuleReport, evaluate_modules};
use module_compat::version::is_version_compatible;

#[derive(Parser)]
#[command(name = "module-compat")]
#[command(version, about = "Interface version compatibility checks for pluggable modules")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a concrete version against a requirement
    Check {
        /// Version an interface is provided at, e.g. "2.3.0"
        got: String,
        /// Requirement: one or more whitespace-separated versions, e.g. "1.0 2.3"
        wanted: String,
    },
    /// Evaluate module manifests against a shell configuration
    Modules {
        /// Shell configuration file (JSON)
        #[arg(long)]
        config: PathBuf,
        /// Print reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { got, wanted } => {
            if is_version_compatible(&got, &wanted) {
                println!("{} satisfies {}", got, wanted);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{} does not satisfy {}", got, wanted);
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Modules { config, json } => {
            let shell = ShellConfig::load(&config)?;
            let manifests = shell
                .modules
                .iter()
                .map(|path| ModuleManifest::load(path))
                .collect::<Result<Vec<_>, _>>()?;

            let reports = evaluate_modules(&shell, &manifests);

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print_reports(&reports);
            }

            if reports.iter().all(|r| r.eligible) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn print_reports(reports: &[ModuleReport]) {
    for report in reports {
        let verdict = if report.eligible {
            "eligible"
        } else {
            "not eligible"
        };
        println!("{}: {}", report.module, verdict);
        for check in &report.checks {
            println!(
                "  {}: required {} / provided {} -> {}",
                check.interface,
                check.required,
                check.provided.as_deref().unwrap_or("-"),
                check.status.as_str()
            );
        }
    }
}
