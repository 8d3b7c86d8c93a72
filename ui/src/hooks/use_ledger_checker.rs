use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug, strum::EnumIs)]
pub enum LedgerConnectionStatus {
    Connected,
    Disconnected(String),
}

/// Classifies API call results so the app can show a single "ledger
/// unreachable" banner instead of a modal per failed call.
#[derive(Clone, Copy)]
pub struct LedgerChecker {
    status: Signal<LedgerConnectionStatus>,
}

impl LedgerChecker {
    /// Checks a result by reference without consuming it.
    /// Returns `true` if the result is Ok.
    /// If Err, a connection-shaped error flips the shared status to
    /// Disconnected; an Ok result flips a previous Disconnected back.
    pub fn check_ref<T, E: std::fmt::Display>(&mut self, result: &Result<T, E>) -> bool {
        match result {
            Ok(_) => {
                if self.status.peek().is_disconnected() {
                    self.status.set(LedgerConnectionStatus::Connected);
                }
                true
            }
            Err(e) => {
                let error_msg = e.to_string();
                if Self::is_connection_error(&error_msg) {
                    dioxus_logger::tracing::warn!("ledger RPC error: {}", error_msg);
                    self.status
                        .set(LedgerConnectionStatus::Disconnected(error_msg));
                }
                false
            }
        }
    }

    /// The shared status signal; read it in a component to subscribe.
    pub fn status(&self) -> Signal<LedgerConnectionStatus> {
        self.status
    }

    fn is_connection_error(msg: &str) -> bool {
        let msg = msg.to_lowercase();
        msg.contains("connection refused")
            || msg.contains("broken pipe")
            || msg.contains("network unreachable")
            || msg.contains("connection reset")
            || msg.contains("failed to connect")
            || msg.contains("deadline")
            || msg.contains("channel closed")
    }
}

pub fn use_ledger_checker() -> LedgerChecker {
    let status = use_context::<Signal<LedgerConnectionStatus>>();
    LedgerChecker { status }
}
