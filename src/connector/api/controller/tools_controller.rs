use anyhow::{Context, Result};
use serde_json::Value;

use super::super::Container;

pub struct ToolsController<'a> {
    container: &'a Container,
}

impl<'a> ToolsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn list(&self) -> Result<String> {
        let definitions = self.container.tool_registry().definitions();
        Ok(serde_json::to_string_pretty(&definitions)?)
    }

    pub async fn call(&self, name: String, args: String) -> Result<String> {
        let args: Value =
            serde_json::from_str(&args).context("Tool arguments must be a JSON object")?;
        Ok(self.container.tool_registry().call(&name, args).await?)
    }
}
