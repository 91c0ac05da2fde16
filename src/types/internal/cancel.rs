use tokio::sync::watch;

/// Cancellation signal handed to write operations
///
/// Cloning is cheap; every clone observes the same handle. A signal whose handle
/// was dropped without cancelling never fires.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

/// Owning side of a [`CancelSignal`]
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelSignal {
    pub fn pair() -> (CancelHandle, CancelSignal) {
        let (tx, rx) = watch::channel(false);
        (CancelHandle { tx }, CancelSignal { rx })
    }

    /// A signal that is never triggered
    pub fn none() -> CancelSignal {
        Self::pair().1
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the handle cancels; pends forever otherwise
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        // send_replace succeeds even when every receiver is gone
        self.tx.send_replace(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancelled_resolves_after_cancel() {
        let (handle, signal) = CancelSignal::pair();
        assert!(!signal.is_cancelled());

        handle.cancel();

        tokio::time::timeout(Duration::from_millis(100), signal.cancelled())
            .await
            .expect("signal should resolve after cancel");
        assert!(signal.is_cancelled());
    }

    #[tokio::test]
    async fn test_none_never_fires() {
        let signal = CancelSignal::none();

        let result = tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;
        assert!(result.is_err());
        assert!(!signal.is_cancelled());
    }
}
