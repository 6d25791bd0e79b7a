//! Minimal CLI: GraphQL schema files in → Elm modules out.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use rayon::prelude::*;

use crate::naming::title_case;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert GraphQL schema files into Elm modules with type declarations and JSON decoders
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// One or more .graphql schema files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// output directory or .elm file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Elm module name (derived from the input file name if omitted; single input only)
    #[arg(long)]
    module: Option<String>,

    /// include the decodeFromString helper in the output
    #[arg(long, default_value_t = false)]
    with_utilities: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        if source_paths.is_empty() {
            bail!("no input files");
        }
        if source_paths.len() > 1 {
            if self.module.is_some() {
                bail!("--module only applies to a single input file");
            }
            if let Some(out) = self.out.as_ref() {
                if !out_is_directory(out) {
                    bail!("--out must be a directory when converting multiple files");
                }
            }
        }

        // Files convert independently; collect() keeps command-line order
        // for the writes below, whatever rayon does in between.
        let outcomes: Vec<(PathBuf, Result<(String, String)>)> = source_paths
            .par_iter()
            .map(|path| (path.clone(), self.convert_file(path)))
            .collect();

        let mut failures = 0usize;
        for (path, outcome) in outcomes {
            match outcome {
                Ok((module_name, elm_source)) => self.write_output(&module_name, &elm_source)?,
                Err(error) => {
                    failures += 1;
                    eprintln!("{} {}: {error:#}", "error:".red().bold(), path.display());
                }
            }
        }
        if failures > 0 {
            bail!("{failures} input file(s) failed to convert");
        }
        Ok(())
    }

    fn convert_file(&self, path: &Path) -> Result<(String, String)> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let module_name = self
            .module
            .clone()
            .unwrap_or_else(|| module_name_from_path(path));
        let document = crate::parse::parse_document(&source)?;
        let schema = crate::extract::extract_document(&document)?;
        let elm_source =
            crate::assemble::assemble_module(&module_name, &schema, self.with_utilities);
        Ok((module_name, elm_source))
    }

    fn write_output(&self, module_name: &str, elm_source: &str) -> Result<()> {
        let Some(out) = self.out.as_ref() else {
            print!("{elm_source}");
            return Ok(());
        };
        let path = resolve_output_path(out, module_name);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        fs::write(&path, elm_source)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("{} {}", "wrote".green(), path.display());
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Module naming convention: the input file's stem, title-cased.
/// `my_schema.graphql` → `MySchema`.
fn module_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    title_case(&stem)
}

fn out_is_directory(out: &Path) -> bool {
    out.is_dir() || out.extension().is_none()
}

/// `--out dir` → `dir/<Module>.elm`; `--out path/File.elm` → as given.
fn resolve_output_path(out: &Path, module_name: &str) -> PathBuf {
    if out_is_directory(out) {
        out.join(format!("{module_name}.elm"))
    } else {
        out.to_path_buf()
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

// ------------------------------- Tests ------------------------------------ //
