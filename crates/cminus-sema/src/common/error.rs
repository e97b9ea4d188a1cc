//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic as Report, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};
use thiserror::Error;

use crate::sema::{Diagnostic, Severity};

/// Hard failure surfaced to the host
///
/// Analysis itself never fails; type errors are collected as
/// [`Diagnostic`]s. A host that wants a `Result` converts a finished
/// analysis with `Analysis::into_result`.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("semantic analysis failed with {count} error(s), first: {first}")]
    Semantic { count: usize, first: String },

    #[error("cannot render diagnostic: {0}")]
    Render(#[from] codespan_reporting::files::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub fn semantic(count: usize, first: impl Into<String>) -> Self {
        Self::Semantic {
            count,
            first: first.into(),
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::with_color(ColorChoice::Auto)
    }

    pub fn with_color(choice: ColorChoice) -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(choice),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    /// Build the codespan report for one analyzer diagnostic
    pub fn to_report(&self, file_id: usize, diagnostic: &Diagnostic) -> Report<usize> {
        let report = match diagnostic.severity {
            Severity::Error => Report::error(),
        };

        let mut labels = vec![
            Label::primary(file_id, diagnostic.span.range()).with_message(&diagnostic.message),
        ];
        if let Some((span, note)) = &diagnostic.related {
            labels.push(Label::secondary(file_id, span.range()).with_message(note));
        }

        report
            .with_message(diagnostic.kind.title())
            .with_code(diagnostic.kind.code())
            .with_labels(labels)
    }

    /// Write a diagnostic into any color-aware sink
    pub fn emit_to(
        &self,
        writer: &mut dyn WriteColor,
        file_id: usize,
        diagnostic: &Diagnostic,
    ) -> CompileResult<()> {
        let report = self.to_report(file_id, diagnostic);
        term::emit(writer, &self.config, &self.files, &report)?;
        Ok(())
    }

    /// Write every diagnostic to stderr, in order
    pub fn report_all(&self, file_id: usize, diagnostics: &[Diagnostic]) -> CompileResult<()> {
        let mut out = self.writer.lock();
        for diagnostic in diagnostics {
            self.emit_to(&mut out, file_id, diagnostic)?;
        }
        Ok(())
    }

    /// Render diagnostics without color, e.g. for snapshot output
    pub fn render_plain(&self, file_id: usize, diagnostics: &[Diagnostic]) -> CompileResult<String> {
        let mut buffer = NoColor::new(Vec::new());
        for diagnostic in diagnostics {
            self.emit_to(&mut buffer, file_id, diagnostic)?;
        }
        Ok(String::from_utf8_lossy(&buffer.into_inner()).into_owned())
    }

    /// Build the codespan report for a hard failure
    pub fn error_report(&self, error: &CompileError) -> Report<usize> {
        match error {
            CompileError::Semantic { count, first } => Report::error()
                .with_message(format!("semantic analysis failed with {count} error(s)"))
                .with_notes(vec![format!("first error: {first}")]),

            CompileError::Render(err) => {
                Report::error().with_message(format!("cannot render diagnostic: {err}"))
            }

            CompileError::Io(err) => Report::error().with_message(format!("IO error: {err}")),
        }
    }

    pub fn report_error(&self, error: &CompileError) -> CompileResult<()> {
        let report = self.error_report(error);
        term::emit(&mut self.writer.lock(), &self.config, &self.files, &report)?;
        Ok(())
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
