//! The generation pipeline: load, derive, emit, write.
//!
//! Under [`FailurePolicy::Abort`] every output is rendered in memory before
//! anything touches the output directory, so a derivation, missing-category
//! or render failure leaves no file behind.

use std::path::{Path, PathBuf};

use crate::annotate::annotate;
use crate::emitter::{Emitter, EmitterKind};
use crate::error::{BlockGenError, Result};
use crate::header::Header;
use crate::spec::Specification;
use crate::templates::renderer::TemplateRenderer;
use crate::writer::{self, GeneratedFile};

/// What to do when one output file fails to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run and write nothing.
    #[default]
    Abort,
    /// Report the failure, skip that file, and still write the others.
    Continue,
}

/// A file written by [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub kind: EmitterKind,
    pub path: PathBuf,
}

/// A file skipped under [`FailurePolicy::Continue`] because it failed to render.
#[derive(Debug)]
pub struct RenderFailure {
    pub kind: EmitterKind,
    pub error: BlockGenError,
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written, in emission order.
    pub written: Vec<WrittenFile>,
    pub failures: Vec<RenderFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files the run attempted, written or not.
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failures.len()
    }
}

#[derive(Debug, Default)]
struct RenderedOutputs {
    files: Vec<GeneratedFile>,
    failures: Vec<RenderFailure>,
}

/// Runs every emitter over one specification.
pub struct Generator {
    renderer: TemplateRenderer,
    emitters: Vec<Emitter>,
}

impl Generator {
    pub fn new(emitters: Vec<Emitter>) -> Self {
        Self {
            renderer: TemplateRenderer::new(),
            emitters,
        }
    }

    /// Factory and execution test emitters using the bundled templates.
    pub fn bundled() -> Self {
        Self::new(EmitterKind::ALL.into_iter().map(Emitter::bundled).collect())
    }

    /// Derive, render every output, then write the successful ones into `output_dir`.
    ///
    /// `output_dir` must already exist. Write failures are always fatal.
    pub fn generate(
        &self,
        spec: &Specification,
        output_dir: &Path,
        header: &Header,
        policy: FailurePolicy,
    ) -> Result<GenerationReport> {
        let outputs = self.render(spec, header, policy)?;

        let mut report = GenerationReport {
            written: Vec::with_capacity(outputs.files.len()),
            failures: outputs.failures,
        };
        for file in &outputs.files {
            let path = writer::write_into(output_dir, file)?;
            report.written.push(WrittenFile {
                kind: file.kind,
                path,
            });
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "generation finished"
        );
        Ok(report)
    }

    /// Derive and render every output without writing anything.
    fn render(
        &self,
        spec: &Specification,
        header: &Header,
        policy: FailurePolicy,
    ) -> Result<RenderedOutputs> {
        tracing::info!("deriving type support");
        let annotated = annotate(spec)?;
        annotated.require_categories()?;

        let mut outputs = RenderedOutputs::default();
        for emitter in &self.emitters {
            let kind = emitter.kind();
            tracing::info!(file = %kind.file_name(), "rendering");

            match emitter.emit(&annotated, &self.renderer, header) {
                Ok(contents) => outputs.files.push(GeneratedFile { kind, contents }),
                Err(error) if policy == FailurePolicy::Continue => {
                    tracing::error!(file = %kind.file_name(), %error, "render failed, skipping file");
                    outputs.failures.push(RenderFailure { kind, error });
                }
                Err(error) => return Err(error),
            }
        }

        Ok(outputs)
    }
}
