//! CLI definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;
use vfbake_core::{BakeOptions, bake_file};

#[derive(Debug, Parser)]
#[command(name = "vfbake", version)]
#[command(about = "Rename the family, scrub \"Display\" from style names and build a STAT table")]
pub struct Cli {
    /// Rename family to <name> instead of "Inter Variable"
    #[arg(long, value_name = "name")]
    pub family: Option<String>,

    /// Output font file. Defaults to input file (overwrite)
    #[arg(short, long, value_name = "file")]
    pub output: Option<PathBuf>,

    /// Input font file
    #[arg(value_name = "file")]
    pub input: PathBuf,
}

impl Cli {
    pub fn options(&self) -> BakeOptions {
        BakeOptions::new(self.family.clone(), self.output.clone())
    }

    pub fn run(self) -> Result<()> {
        let options = self.options();
        debug!("{options:?}");
        bake_file(&self.input, &options)?;
        Ok(())
    }
}
