// src/container.rs
use std::sync::Arc;
use tokio::sync::Mutex;

/// The output element a handler writes into. Every write replaces the
/// whole content.
pub trait ResultContainer: Send {
    fn replace_content(&mut self, markup: String);
}

/// Handle shared between concurrent invocations; last writer wins.
pub type SharedContainer<C> = Arc<Mutex<C>>;

pub fn shared<C: ResultContainer>(container: C) -> SharedContainer<C> {
    Arc::new(Mutex::new(container))
}

/// In-memory container holding a markup fragment.
#[derive(Debug, Clone, Default)]
pub struct HtmlContainer {
    id: String,
    content: String,
    writes: u64,
}

impl HtmlContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// How many times the content has been replaced.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl ResultContainer for HtmlContainer {
    fn replace_content(&mut self, markup: String) {
        self.content = markup;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites() {
        let mut container = HtmlContainer::new("result");
        container.replace_content("<p>first</p>".to_string());
        container.replace_content("<p>second</p>".to_string());

        assert_eq!(container.id(), "result");
        assert_eq!(container.content(), "<p>second</p>");
        assert_eq!(container.writes(), 2);
    }
}
