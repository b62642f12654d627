use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use labor_exchange::exchange::{ExchangeRepository, ExchangeStore, RepositoryError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Volatile store backing the demo command; nothing touches disk.
#[derive(Default)]
pub(crate) struct InMemoryExchangeRepository {
    store: Mutex<ExchangeStore>,
}

impl ExchangeRepository for InMemoryExchangeRepository {
    fn load(&self) -> Result<ExchangeStore, RepositoryError> {
        Ok(self.store.lock().expect("store mutex poisoned").clone())
    }

    fn save(&self, store: &ExchangeStore) -> Result<(), RepositoryError> {
        *self.store.lock().expect("store mutex poisoned") = store.clone();
        Ok(())
    }
}
