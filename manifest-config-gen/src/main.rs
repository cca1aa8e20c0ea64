//! CLI entrypoint for `manifest-config-gen`.

use clap::Parser;

use manifest_config_gen::cli::Args;
use manifest_config_gen::diagnostics::DiagnosticReport;
use manifest_config_gen::error::GeneratorError;
use manifest_config_gen::{generator, schema, writer};

fn main() -> Result<(), GeneratorError> {
    run()
}

fn run() -> Result<(), GeneratorError> {
    let args = Args::parse();

    let mut batch = Vec::new();
    for path in &args.schemas {
        let file = schema::load_schema(path)?;
        batch.extend(file.interfaces);
    }

    let generation = generator::generate(&batch)?;

    // Successful siblings still produce output; diagnostics fail the build
    // afterwards.
    if !args.should_check_only {
        for class in &generation.classes {
            writer::write_class(&args.out_dir, class)?;
        }
    }

    if !generation.diagnostics.is_empty() {
        return Err(GeneratorError::Validation(DiagnosticReport::new(
            generation.diagnostics,
        )));
    }
    Ok(())
}
