use tracing::{debug, error, info};

use crate::core::change::{ChangeAction, ChangeBatch, ChangeOutcome, ChangeResponse};
use crate::core::provider::ServiceError;
use crate::reconciler::Reconciliation;

pub fn change_submitted(batch: &ChangeBatch, response: &ChangeResponse) {
    for change in &batch.changes {
        debug!("Changed record - {}: {}", change.action, response.raw);
    }
}

pub fn change_rejected(batch: &ChangeBatch, err: &ServiceError) {
    let payload = serde_json::to_string(batch).unwrap_or_else(|_| format!("{batch:?}"));
    error!(
        code = %err.code,
        "Change rejected by the DNS service: {} (batch: {})",
        err.context,
        payload
    );
}

fn past_tense(action: ChangeAction) -> &'static str {
    match action {
        ChangeAction::Create => "created",
        ChangeAction::Upsert => "created/modified",
        ChangeAction::Delete => "deleted",
    }
}

pub fn log_reconciliation(reconciliation: &Reconciliation) {
    let name = reconciliation.name();
    let verb = reconciliation.action().map_or("changed", past_tense);
    match reconciliation.outcome() {
        ChangeOutcome::Submitted(_) => info!("Record {}: {}", verb, name),
        ChangeOutcome::Rejected(err) => error!("Record not {}: {} ({})", verb, name, err.code),
        ChangeOutcome::NotAttempted => info!(record = %name, "There is nothing to delete."),
    }
}

/// Collects formatted log output for assertions.
#[cfg(test)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a subscriber writing into a fresh buffer.
    pub(crate) fn logs_of<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, buffer.contents())
    }
}
