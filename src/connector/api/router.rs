use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{CheckController, RetrieveController, ToolsController};

pub struct Router<'a> {
    retrieve_controller: RetrieveController<'a>,
    check_controller: CheckController<'a>,
    tools_controller: ToolsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            retrieve_controller: RetrieveController::new(container),
            check_controller: CheckController::new(container),
            tools_controller: ToolsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Retrieve { query } => self.retrieve_controller.retrieve(query).await,
            Commands::Check { query } => self.check_controller.check(query).await,
            Commands::Tools => self.tools_controller.list(),
            Commands::Call { name, args } => self.tools_controller.call(name, args).await,
            Commands::Mcp => anyhow::bail!("the mcp command is served directly, not routed"),
        }
    }
}
