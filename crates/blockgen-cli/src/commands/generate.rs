use std::path::Path;

use anyhow::{Context, Result};

use blockgen_core::header::Header;
use blockgen_core::pipeline::{FailurePolicy, Generator};
use blockgen_core::spec::Specification;

use crate::output::{self, Stage};

/// Generate `Factory.cpp` and `BlockExecutionTestAuto.cpp` into `output_dir`.
///
/// Everything is rendered before the first write. With `keep_going`, a file
/// that fails to render is reported and skipped while the other one is still
/// written; the command fails either way.
pub fn run(output_dir: &Path, spec_path: Option<&Path>, keep_going: bool) -> Result<()> {
    let output_dir = std::path::absolute(output_dir)
        .with_context(|| format!("cannot resolve output directory {}", output_dir.display()))?;
    let policy = if keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };
    tracing::debug!(?policy, output_dir = %output_dir.display(), "starting generation");

    output::print_banner(&output_dir);

    output::print_stage(Stage::LoadSpecification);
    let spec = match spec_path {
        Some(path) => {
            output::print_detail("Specification", &path.display().to_string());
            Specification::load(path)?
        }
        None => Specification::bundled()?,
    };

    output::print_stage(Stage::Generate);
    let report = Generator::bundled().generate(&spec, &output_dir, &Header::now(), policy)?;
    for written in &report.written {
        output::print_written(written.kind, &written.path);
    }
    for failure in &report.failures {
        output::print_skipped(failure);
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} generated files failed to render",
            report.failures.len(),
            report.attempted()
        );
    }

    Ok(())
}
