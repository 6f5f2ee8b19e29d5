use anyhow::Result;

use super::super::Container;

pub struct RetrieveController<'a> {
    container: &'a Container,
}

impl<'a> RetrieveController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn retrieve(&self, query: String) -> Result<String> {
        Ok(self.container.retriever().retrieve(&query).await)
    }
}
