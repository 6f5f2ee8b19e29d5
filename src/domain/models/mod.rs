mod chat_completion;
mod ragflow_config;

pub use chat_completion::*;
pub use ragflow_config::*;
