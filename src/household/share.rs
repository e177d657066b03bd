// Clipboard and share targets
//
// Both calls are fire-and-forget: callers log failures and move on, nothing
// is fed back into the store.

use anyhow::Result;
use tracing::info;

pub trait ShareSink {
    fn copy_text(&mut self, text: &str) -> Result<()>;
    fn share_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shared {
    Copied(String),
    Shared(String),
}

/// Keeps every payload in memory. The terminal has no system share sheet,
/// so the TUI uses this and shows the last payload in its status line.
#[derive(Debug, Clone, Default)]
pub struct MemoryShare {
    history: Vec<Shared>,
}

impl MemoryShare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Shared] {
        &self.history
    }

    pub fn last(&self) -> Option<&Shared> {
        self.history.last()
    }
}

impl ShareSink for MemoryShare {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        info!(len = text.len(), "copied to clipboard");
        self.history.push(Shared::Copied(text.to_string()));
        Ok(())
    }

    fn share_text(&mut self, text: &str) -> Result<()> {
        info!(len = text.len(), "shared");
        self.history.push(Shared::Shared(text.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_share_records_in_order() {
        let mut sink = MemoryShare::new();
        sink.copy_text("ABC123XY").unwrap();
        sink.share_text("join us").unwrap();
        assert_eq!(
            sink.history(),
            &[
                Shared::Copied("ABC123XY".to_string()),
                Shared::Shared("join us".to_string())
            ]
        );
        assert_eq!(sink.last(), Some(&Shared::Shared("join us".to_string())));
    }
}
