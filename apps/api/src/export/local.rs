use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::{ExportError, Exporter};

/// Writes files under a local directory and copies text by piping it into a
/// configured clipboard program (e.g. `wl-copy`, `pbcopy`, `xclip -selection clipboard`).
///
/// A clipboard program still running after `clipboard_timeout` is killed and
/// the copy reported as failed.
#[derive(Debug, Clone)]
pub struct LocalExporter {
    dir: PathBuf,
    clipboard: Option<Vec<String>>,
    clipboard_timeout: Duration,
}

impl LocalExporter {
    pub fn new(
        dir: impl Into<PathBuf>,
        clipboard: Option<Vec<String>>,
        clipboard_timeout: Duration,
    ) -> Self {
        Self {
            dir: dir.into(),
            clipboard: clipboard.filter(|argv| !argv.is_empty()),
            clipboard_timeout,
        }
    }
}

#[async_trait]
impl Exporter for LocalExporter {
    async fn copy_text(&self, text: &str) -> Result<(), ExportError> {
        let (program, args) = self
            .clipboard
            .as_deref()
            .and_then(|argv| argv.split_first())
            .ok_or(ExportError::ClipboardUnavailable)?;

        debug!("Piping {} bytes into {program}", text.len());
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child.stdin.take();
        let deliver = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(text.as_bytes()).await?;
                // Dropping stdin closes the pipe so the program can exit.
            }
            child.wait().await
        };

        let status = tokio::time::timeout(self.clipboard_timeout, deliver)
            .await
            .map_err(|_| ExportError::ClipboardTimeout(self.clipboard_timeout))??;
        if !status.success() {
            return Err(ExportError::ClipboardCommand(status));
        }
        Ok(())
    }

    async fn save_file(&self, name: &str, content: &str) -> Result<(), ExportError> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ExportError::InvalidFileName(name.to_string()));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(name);
        tokio::fs::write(&path, content).await?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}
