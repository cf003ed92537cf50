use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// What happened to one dispatched call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcRequestOutcome {
    /// Command wire name
    pub method: &'static str,
    /// Wall time of the round trip
    pub elapsed: Duration,
    /// Whether a result came back
    pub success: bool,
    /// Transport timeout in effect
    pub timeout: Option<Duration>,
    /// Daemon error code, when the daemon reported one
    pub error_code: Option<i64>,
}

type Observer = Arc<dyn Fn(&RpcRequestOutcome) + Send + Sync>;

/// Observers notified after every dispatched call.
#[derive(Clone, Default)]
pub struct RpcClientHooks {
    observers: Vec<Observer>,
}

impl RpcClientHooks {
    /// Creates an empty set of observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer.
    #[must_use]
    pub fn on_request<F>(mut self, observer: F) -> Self
    where
        F: Fn(&RpcRequestOutcome) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Whether no observer is installed.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn notify(&self, outcome: RpcRequestOutcome) {
        for observer in &self.observers {
            observer(&outcome);
        }
    }
}

impl fmt::Debug for RpcClientHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClientHooks")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn every_observer_is_notified() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first = calls.clone();
        let second = calls.clone();
        let hooks = RpcClientHooks::new()
            .on_request(move |_| {
                first.fetch_add(1, Ordering::SeqCst);
            })
            .on_request(move |outcome| {
                assert_eq!(outcome.method, "getinfo");
                second.fetch_add(1, Ordering::SeqCst);
            });

        hooks.notify(RpcRequestOutcome {
            method: "getinfo",
            elapsed: Duration::from_millis(3),
            success: true,
            timeout: None,
            error_code: None,
        });
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
