// src/modules/notification/application/ports/outgoing/change_notifier.rs

use crate::notification::domain::ContentEvent;

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Fan-out of [`ContentEvent`]s to whoever renders content.
///
/// Publishing is fire-and-forget: delivery cannot fail and is not
/// acknowledged.
pub trait ChangeNotifier: Send + Sync {
    fn publish(&self, event: &ContentEvent);
}

/// Notifier for contexts with nobody listening (batch seeding, tools).
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl ChangeNotifier for SilentNotifier {
    fn publish(&self, _event: &ContentEvent) {}
}
