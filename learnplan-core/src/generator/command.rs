//! Command-backed generator implementation

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::plan::ChatMessage;
use crate::{Error, Result};

use super::{transcript, PlanGenerator, EMPTY_REPLY};

/// Generator that pipes the conversation through an external command
///
/// The transcript is written to the command's stdin and its stdout is taken
/// as the reply.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    pub command: String,
    pub args: Vec<String>,
    pub model: Option<String>,
    pub timeout: Duration,
}

impl CommandGenerator {
    /// Create a generator running `command` with default settings
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            model: None,
            timeout: Duration::from_secs(120),
        }
    }

    /// Build a generator from configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let generator = Self::new(config.command.clone())
            .with_args(config.args.clone())
            .with_timeout(config.timeout);

        match &config.model {
            Some(model) => generator.with_model(model.clone()),
            None => generator,
        }
    }

    /// Set the arguments passed before the model flag
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Request a specific model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set how long to wait for the reply
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the command to spawn
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);

        if let Some(ref model) = self.model {
            cmd.arg("--model").arg(model);
        }

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd
    }

    async fn run(&self, input: String) -> Result<String> {
        let mut child = self.build_command().spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Generator(format!(
                    "Generator executable not found at '{}'",
                    self.command
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let stdin = child.stdin.take();
        let write = async move {
            if let Some(mut stdin) = stdin {
                // The command may exit without reading its input.
                if let Err(e) = stdin.write_all(input.as_bytes()).await {
                    debug!(error = %e, "Generator did not accept input");
                }
            }
        };

        let ((), output) = tokio::join!(write, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Generator(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let reply = String::from_utf8_lossy(&output.stdout);
        if reply.trim().is_empty() {
            Ok(EMPTY_REPLY.to_string())
        } else {
            Ok(reply.into_owned())
        }
    }
}

#[async_trait]
impl PlanGenerator for CommandGenerator {
    fn name(&self) -> &str {
        &self.command
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        let input = transcript(messages);
        debug!(command = %self.command, bytes = input.len(), "Running generator");

        tokio::time::timeout(self.timeout, self.run(input))
            .await
            .map_err(|_| {
                Error::Generator(format!(
                    "'{}' timed out after {}s",
                    self.command,
                    self.timeout.as_secs_f64()
                ))
            })?
    }

    fn is_available(&self) -> bool {
        std::process::Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}
