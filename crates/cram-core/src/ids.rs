//! Local id minting.
//!
//! Server-owned entities arrive with their ids already set. The only ids
//! minted client-side are for optimistic chat messages, which exist purely in
//! the in-memory transcript; a `local-` prefix keeps them from ever being
//! mistaken for server ids.

/// Prefix for client-minted conversation message ids.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Mint an id for a client-side conversation message.
///
/// Falls back to a process-unique counter if the system entropy source is
/// unavailable, which keeps transcript appends infallible.
#[must_use]
pub fn local_message_id() -> String {
    let mut bytes = [0u8; 8];
    if getrandom::fill(&mut bytes).is_ok() {
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        format!("{LOCAL_ID_PREFIX}{hex}")
    } else {
        use std::sync::atomic::{AtomicU64, Ordering};
        static FALLBACK: AtomicU64 = AtomicU64::new(0);
        let n = FALLBACK.fetch_add(1, Ordering::Relaxed);
        format!("{LOCAL_ID_PREFIX}seq-{n}")
    }
}

/// Check whether an id was minted locally rather than assigned by the server.
#[must_use]
pub fn is_local_id(id: &str) -> bool {
    id.starts_with(LOCAL_ID_PREFIX)
}
