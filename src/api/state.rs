//! API server state holding the single service record

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::ServiceRecord;

/// API server state
///
/// Cloning is cheap; every clone shares the same record cell.
#[derive(Clone, Debug)]
pub struct AppState {
    record: Arc<RwLock<ServiceRecord>>,
}

impl AppState {
    pub fn new(record: ServiceRecord) -> Self {
        Self {
            record: Arc::new(RwLock::new(record)),
        }
    }

    /// Copy of the most recently committed record
    pub async fn snapshot(&self) -> ServiceRecord {
        self.record.read().await.clone()
    }

    /// Replace the whole record, returning the previous value
    pub async fn replace(&self, record: ServiceRecord) -> ServiceRecord {
        let mut guard = self.record.write().await;
        std::mem::replace(&mut *guard, record)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceRecord::initial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_serves_initial_record() {
        let state = AppState::default();
        assert_eq!(state.snapshot().await, ServiceRecord::initial());
    }

    #[tokio::test]
    async fn test_replace_is_visible_to_clones() {
        let state = AppState::default();
        let other = state.clone();

        let previous = state.replace(ServiceRecord::new("1.0", "2.0", "v2")).await;

        assert_eq!(previous, ServiceRecord::initial());
        assert_eq!(other.snapshot().await, ServiceRecord::new("1.0", "2.0", "v2"));
    }
}
