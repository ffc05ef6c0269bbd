use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use super::{AnswerError, Answerer};

pub const QUESTION_ENV: &str = "QA_QUESTION";
pub const CONTEXT_ENV: &str = "QA_CONTEXT";

/// Delegates answering to a shell command. The command receives the question
/// and context through `QA_QUESTION` / `QA_CONTEXT` and prints the answer.
pub struct BridgeAnswerer {
    bridge_cmd: String,
    timeout_ms: u64,
}

impl BridgeAnswerer {
    pub fn new(bridge_cmd: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            bridge_cmd: bridge_cmd.into(),
            timeout_ms,
        }
    }
}

#[async_trait]
impl Answerer for BridgeAnswerer {
    async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        if self.bridge_cmd.trim().is_empty() {
            return Err(AnswerError::MissingCommand);
        }

        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(&self.bridge_cmd)
            .env(QUESTION_ENV, question)
            .env(CONTEXT_ENV, context)
            .kill_on_drop(true);

        let output = timeout(Duration::from_millis(self.timeout_ms), cmd.output())
            .await
            .map_err(|_| AnswerError::Timeout)?
            .map_err(AnswerError::Spawn)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AnswerError::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            return Err(AnswerError::EmptyOutput);
        }

        Ok(stdout)
    }

    fn name(&self) -> &'static str {
        "bridge"
    }
}
