use clap::Parser;
use std::path::PathBuf;

/// Generate AppStream MetaInfo files from a component manifest
#[derive(Parser, Debug)]
#[command(name = "metainfo-gen")]
#[command(version = "0.2.0")]
#[command(
    about = "Generate AppStream MetaInfo files from a component manifest",
    long_about = None
)]
pub struct Args {
    /// Path to the component manifest (TOML, or JSON for .json files)
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Output directory (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also generate Meson build-system snippets
    #[arg(long)]
    pub meson_snippets: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
