//! Transient user notifications.
//!
//! Actions report progress through a [`Notifier`]: a keyed loading message
//! that is later dismissed, followed by a success or error message.

/// Sink for action notifications.
pub trait Notifier {
    /// Show (or replace) the loading message with the given key.
    fn loading(&self, key: &str, message: &str);

    /// Remove the loading message with the given key.
    fn dismiss(&self, key: &str);

    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn loading(&self, key: &str, message: &str) {
        (**self).loading(key, message);
    }

    fn dismiss(&self, key: &str) {
        (**self).dismiss(key);
    }

    fn success(&self, message: &str) {
        (**self).success(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Notifier that writes to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn loading(&self, key: &str, message: &str) {
        tracing::info!(key, "{}", message);
    }

    fn dismiss(&self, _key: &str) {}

    fn success(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// `"Transaction failed: <first 50 chars>..."`, the short form shown for
/// write errors.
pub fn transaction_failed_message(error: &impl std::fmt::Display) -> String {
    let text = error.to_string();
    let short: String = text.chars().take(50).collect();
    format!("Transaction failed: {}...", short)
}
