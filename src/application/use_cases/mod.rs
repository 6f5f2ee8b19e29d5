mod query_knowledge_base;
mod query_knowledge_base_tool;
mod tool_registry;

pub use query_knowledge_base::*;
pub use query_knowledge_base_tool::*;
pub use tool_registry::*;
