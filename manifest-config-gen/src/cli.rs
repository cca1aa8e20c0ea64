//! Command-line interface definitions for `manifest-config-gen`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `manifest-config-gen`.
#[derive(Debug, Parser)]
#[command(name = "manifest-config-gen")]
#[command(about = "Generate manifest-backed configuration accessor classes")]
#[command(version)]
pub struct Args {
    /// Schema files describing annotated interfaces (`.toml` or `.json`).
    #[arg(required = true, value_name = "schema")]
    pub schemas: Vec<Utf8PathBuf>,
    /// Output directory for generated sources.
    #[arg(long, value_name = "path", default_value = "generated")]
    pub out_dir: Utf8PathBuf,
    /// Validate the batch without writing generated sources.
    #[arg(long = "check")]
    pub should_check_only: bool,
}
