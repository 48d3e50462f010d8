//! Interpret command: answers a chat message with the JSON reply document.

use crate::agent::{interpret, InterpretRequest};
use crate::comps::{CompAssembler, PriceExtractor};
use crate::config::Config;
use anyhow::{Context, Result};
use tracing::debug;

/// Runs one chat message through the interpret contract.
pub struct InterpretCommand {
    config: Config,
}

impl InterpretCommand {
    /// Creates a new interpret command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Answers a raw message and returns pretty JSON.
    pub async fn execute(&self, message: &str) -> Result<String> {
        let assembler = CompAssembler::new(&self.config);
        self.execute_with(&assembler, message).await
    }

    /// Answers a `{"message": ...}` request document.
    pub async fn execute_request(&self, body: &str) -> Result<String> {
        let request: InterpretRequest =
            serde_json::from_str(body).context("Failed to parse interpret request")?;
        self.execute(&request.message).await
    }

    /// Answers with a provided assembler (for testing).
    pub async fn execute_with<E: PriceExtractor>(
        &self,
        assembler: &CompAssembler<E>,
        message: &str,
    ) -> Result<String> {
        debug!("Interpreting message (live comps: {})", assembler.is_live());
        let response = interpret(message, assembler).await?;
        serde_json::to_string_pretty(&response).context("Failed to serialize response")
    }
}
