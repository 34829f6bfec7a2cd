mod adapters;
mod application;
mod cli;
mod metainfo_generation;
mod ports;
mod shared;

use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use application::dto::GenerateRequest;
use application::use_cases::GenerateComponentUseCase;
use cli::Args;
use ports::outbound::OutputPresenter;
use shared::error::{ExitCode, MetainfoError};
use shared::Result;
use std::process;

fn main() {
    // clap itself exits with code 2 on argument errors
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Maps an error to the process exit code: field-validation failures get
/// their own code so CI systems can tell them apart from I/O trouble.
fn exit_code_for(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<MetainfoError>() {
        Some(err) if err.is_validation_error() => ExitCode::ValidationFailed,
        _ => ExitCode::ApplicationError,
    }
}

fn run(args: Args) -> Result<()> {
    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemReader::new();

    // Create use case with injected dependencies
    let use_case = GenerateComponentUseCase::new(manifest_reader);

    // Execute use case
    let request = GenerateRequest::new(args.manifest, args.meson_snippets);
    let response = use_case.execute(request)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_dir) = args.output {
        Box::new(FileSystemWriter::new(output_dir))
    } else {
        Box::new(StdoutPresenter::with_banner())
    };

    for (filename, content) in response.artifacts() {
        presenter.present(&filename, content)?;
    }

    Ok(())
}
