//! Announcer implementations.
//!
//! Round results are announced as short phrases. These adapters either log
//! them or echo them on the console.

use async_trait::async_trait;

use crate::infrastructure::ports::AnnouncerPort;

/// Emits announcements as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

#[async_trait]
impl AnnouncerPort for LogAnnouncer {
    async fn announce(&self, phrase: String) {
        tracing::info!(target: "announcer", phrase = %phrase, "Announcement");
    }
}

/// Prints announcements to stdout, for the console runner.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAnnouncer;

#[async_trait]
impl AnnouncerPort for ConsoleAnnouncer {
    async fn announce(&self, phrase: String) {
        println!(">> {}", phrase);
    }
}
