//! The bake pipeline: family rename, style cleanup, STAT synthesis, save.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use log::{info, warn};
use read_fonts::FontRef;
use vfbake_font_names::{
    NameTable, clean_style_name, is_italic, rename_family, rename_style, style_name,
};
use vfbake_font_stat::{StatEncoding, build_stat_table};

use crate::{
    config::{BakeOptions, STRIP_STYLE_TOKEN},
    font::{assemble_font, declared_axes},
    io::FontFile,
};

/// Run one stage, logging its duration.
fn run_stage<T>(name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let result = f().with_context(|| format!("{name} failed"))?;
    info!("{name} ({:.2}ms)", start.elapsed().as_secs_f64() * 1000.0);
    Ok(result)
}

/// Bake font data in memory.
///
/// Nothing is returned unless every stage succeeds.
pub fn bake(data: &[u8], options: &BakeOptions) -> Result<Vec<u8>> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    let mut names = NameTable::from_font(&font)?;

    run_stage("Rename family", || Ok(rename_family(&mut names, &options.family)?))?;

    run_stage("Clean style name", || {
        let style = clean_style_name(style_name(&names)?, STRIP_STYLE_TOKEN);
        Ok(rename_style(&mut names, &style)?)
    })?;

    let stat = run_stage("Build STAT table", || {
        let table = build_stat_table(is_italic(&names))?;
        let undeclared = table.undeclared_axes(&declared_axes(&font));
        if !undeclared.is_empty() {
            let tags: Vec<String> = undeclared.iter().map(ToString::to_string).collect();
            warn!("STAT axes not declared in fvar: {}", tags.join(", "));
        }
        Ok(table.compile(&mut names, StatEncoding::PointsAndRanges)?)
    })?;

    run_stage("Assemble font", || assemble_font(&font, &names.to_table(), stat))
}

/// Bake a font file, writing to `options.output` or back over `input`.
///
/// The output is written only after the whole pipeline succeeds. Returns the
/// path written.
pub fn bake_file(input: &Path, options: &BakeOptions) -> Result<PathBuf> {
    let source = FontFile::new(input);
    let target = FontFile::new(options.output.as_deref().unwrap_or(input));

    let data = source.read()?;
    let baked =
        bake(&data, options).with_context(|| format!("Failed to bake {}", input.display()))?;
    let written = target.write(&baked)?;

    info!(
        "{} -> {} ('{}', {} bytes)",
        input.display(),
        written.display(),
        options.family,
        baked.len()
    );
    Ok(written)
}
