// crates/core/src/selection.rs
//! Holder for the discovery source chosen in the wizard.
//!
//! Last-write-wins, no invariants. The same watch-based get/subscribe shape
//! as the poller's job state so callers consume both the same way.

use migration_view_types::Source;
use tokio::sync::watch;

pub struct SourceSelection {
    tx: watch::Sender<Option<Source>>,
}

impl SourceSelection {
    pub fn new() -> Self {
        Self {
            tx: watch::channel(None).0,
        }
    }

    pub fn selected(&self) -> Option<Source> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Source>> {
        self.tx.subscribe()
    }

    pub fn select(&self, source: Source) {
        self.tx.send_replace(Some(source));
    }

    pub fn clear(&self) {
        self.tx.send_replace(None);
    }
}

impl Default for SourceSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use migration_view_types::SourceStatus;
    use uuid::Uuid;

    fn source(name: &str) -> Source {
        Source {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: SourceStatus::UpToDate,
            created_at: Utc::now(),
            on_premises: false,
            agent_version: None,
            inventory: None,
        }
    }

    #[test]
    fn test_select_then_clear() {
        let selection = SourceSelection::new();
        assert!(selection.selected().is_none());

        selection.select(source("vcenter-east"));
        assert_eq!(selection.selected().unwrap().name, "vcenter-east");

        selection.select(source("vcenter-west"));
        assert_eq!(selection.selected().unwrap().name, "vcenter-west");

        selection.clear();
        assert!(selection.selected().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let selection = SourceSelection::new();
        let mut rx = selection.subscribe();

        selection.select(source("vcenter-east"));
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow().as_ref().map(|s| s.name.clone()),
            Some("vcenter-east".to_string())
        );
    }
}
