mod knowledge_retriever;
mod tool;

pub use knowledge_retriever::*;
pub use tool::*;
