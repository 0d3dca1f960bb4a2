use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kiuwan_core::command::build_analysis_command;
use kiuwan_core::config::InvocationConfig;
use kiuwan_core::exec::ProcessRunner;
use kiuwan_core::report::{model::ToolInfo, render};

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();
    init_tracing();

    let config = invocation_config(&args)?;

    if args.dry_run {
        let command = build_analysis_command(&config)?;
        let output = match args.format {
            args::OutputFormat::Json => serde_json::to_string_pretty(&command)?,
            args::OutputFormat::Text => format!("{command}\n"),
        };
        return emit(&args, &output);
    }

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let summary = kiuwan_core::analyze(&config, &ProcessRunner, tool)?;

    let output = match args.format {
        args::OutputFormat::Json => render::render_json(&summary)?,
        args::OutputFormat::Text => render::render_text(&summary),
    };
    emit(&args, &output)?;

    std::process::exit(summary.exit_code());
}

/// Logs go to stderr so stdout stays clean for the summary.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn invocation_config(args: &args::Args) -> Result<InvocationConfig> {
    let source_path = std::path::absolute(&args.source_path).with_context(|| {
        format!(
            "failed to resolve source path: {}",
            args.source_path.display()
        )
    })?;

    // Same default a build tool would inject: the project directory name.
    let software_name = match &args.software_name {
        Some(name) => name.clone(),
        None => source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    Ok(InvocationConfig {
        home: args.home.clone(),
        source_path: source_path.display().to_string(),
        software_name,
        label: args.label.clone(),
        wait_for_results: args.wait_for_results,
        analysis_scope: args.analysis_scope.clone(),
        additional_options: args.additional_options.clone(),
        extra_params: args.extra_params.clone(),
        timestamp_in_log_filename: args.timestamp_in_log_filename,
        create: args.create,
        download_report: args.download_report,
        build_dir: args.build_dir.clone(),
    })
}

fn emit(args: &args::Args, output: &str) -> Result<()> {
    match &args.out {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => {
            print!("{output}");
            std::io::stdout().flush()?;
        }
    }
    Ok(())
}
