//! Terminal output for the generate run.
//!
//! Progress is reported per [`Stage`]; written files and skipped files are
//! reported per [`EmitterKind`]. Errors that end the run are not printed here,
//! they propagate to `main`.

use std::path::Path;

use blockgen_core::emitter::EmitterKind;
use blockgen_core::pipeline::RenderFailure;
use console::style;

/// The steps of a generate run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadSpecification,
    Generate,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::LoadSpecification, Stage::Generate];

    /// 1-based position in [`Stage::ALL`].
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).map_or(0, |i| i + 1)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::LoadSpecification => "Loading block specification",
            Self::Generate => "Deriving type support, rendering and writing sources",
        }
    }
}

pub fn print_banner(output_dir: &Path) {
    let title = "blockgen";
    println!("\n{}", style(title).bold().cyan());
    println!("{}", style("=".repeat(title.len())).dim());
    print_detail("Output", &output_dir.display().to_string());
}

/// `[1/2] Loading block specification`
pub fn print_stage(stage: Stage) {
    let counter = format!("[{}/{}]", stage.number(), Stage::ALL.len());
    println!("{} {}", style(counter).dim(), stage.description());
}

pub fn print_detail(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// `[OK] Factory.cpp -> /abs/out/Factory.cpp`
pub fn print_written(kind: EmitterKind, path: &Path) {
    println!(
        "{} {} -> {}",
        style("[OK]").green().bold(),
        kind.file_name(),
        path.display()
    );
}

/// A file skipped under `--keep-going`. Goes to stderr.
pub fn print_skipped(failure: &RenderFailure) {
    eprintln!(
        "{} {} not written: {}",
        style("[ERROR]").red().bold(),
        failure.kind.file_name(),
        failure.error
    );
}
