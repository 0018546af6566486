//! Document Exporter — converts rendered HTML into a downloadable PDF.
//!
//! Conversion is best-effort: availability is probed once at startup, and
//! when no converter is installed the export endpoint returns raw HTML with
//! a `text/html` content type instead of failing.

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

const CONVERTER_BIN: &str = "wkhtmltopdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("converter is not installed")]
    Unavailable,

    #[error("converter exited with {0}")]
    ConverterFailed(std::process::ExitStatus),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTML→PDF conversion seam. `AppState` holds an `Arc<dyn DocumentExporter>`
/// so tests can substitute a double.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Whether a conversion backend was found at startup.
    fn is_available(&self) -> bool;

    /// Converts an HTML document into PDF bytes. Single attempt, no retry.
    async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// Production exporter shelling out to the `wkhtmltopdf` binary,
/// streaming HTML on stdin and reading the PDF from stdout.
pub struct WkhtmltopdfExporter {
    available: bool,
}

impl WkhtmltopdfExporter {
    /// Probes for the converter binary. A failed probe is not an error;
    /// it just flips the exporter into HTML-passthrough mode.
    pub async fn probe() -> Self {
        let available = Command::new(CONVERTER_BIN)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false);

        Self { available }
    }
}

#[async_trait]
impl DocumentExporter for WkhtmltopdfExporter {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        if !self.available {
            return Err(ExportError::Unavailable);
        }

        let mut child = Command::new(CONVERTER_BIN)
            .arg("--quiet")
            .arg("-") // read HTML from stdin
            .arg("-") // write PDF to stdout
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(html.as_bytes()).await?;
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(ExportError::ConverterFailed(output.status));
        }

        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exporter double standing in for an uninstalled converter.
    pub struct NullExporter;

    #[async_trait]
    impl DocumentExporter for NullExporter {
        fn is_available(&self) -> bool {
            false
        }

        async fn html_to_pdf(&self, _html: &str) -> Result<Vec<u8>, ExportError> {
            Err(ExportError::Unavailable)
        }
    }

    #[tokio::test]
    async fn test_unavailable_exporter_refuses_conversion() {
        let exporter = NullExporter;
        assert!(!exporter.is_available());
        let result = exporter.html_to_pdf("<html></html>").await;
        assert!(matches!(result, Err(ExportError::Unavailable)));
    }
}
