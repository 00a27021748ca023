use indexmap::IndexMap;
use tracing::trace;

use crate::interaction::input::InputEvent;
use crate::interaction::selection::Selection;

/// Callback invoked with every committed Selection.
///
/// Listeners must not mutate the broadcaster they are being notified from;
/// reentrancy is undefined and must be avoided by callers.
pub trait SelectionListener {
    fn on_selection(&mut self, selection: &Selection, source: Option<&InputEvent>);
}

/// Handle for removing a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

/// Synchronous, registration-ordered Selection fan-out.
///
/// With zero listeners registered, every notification is downgraded to a
/// redraw request the host can poll, so a visual zoom/pan still takes effect.
#[derive(Default)]
pub struct SelectionBroadcaster {
    // IndexMap preserves registration order while allowing token removal.
    listeners: IndexMap<u64, Box<dyn SelectionListener>>,
    next_token: u64,
    pending_redraws: u32,
}

impl SelectionBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Box<dyn SelectionListener>) -> ListenerToken {
        let token = self.next_token;
        self.next_token += 1;
        self.listeners.insert(token, listener);
        ListenerToken(token)
    }

    /// Removes a listener. Returns `true` when it was registered.
    pub fn unregister(&mut self, token: ListenerToken) -> bool {
        self.listeners.shift_remove(&token.0).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notifies every listener in registration order.
    pub fn notify(&mut self, selection: &Selection, source: Option<&InputEvent>) {
        if self.listeners.is_empty() {
            self.request_redraw();
            return;
        }
        trace!(
            entries = selection.len(),
            listeners = self.listeners.len(),
            "broadcast selection"
        );
        for listener in self.listeners.values_mut() {
            listener.on_selection(selection, source);
        }
    }

    /// Records one redraw request for the host to pick up.
    pub fn request_redraw(&mut self) {
        self.pending_redraws = self.pending_redraws.saturating_add(1);
    }

    /// Drains the redraw requests accumulated since the last poll.
    pub fn take_redraw_requests(&mut self) -> u32 {
        std::mem::take(&mut self.pending_redraws)
    }
}

impl std::fmt::Debug for SelectionBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionBroadcaster")
            .field("listeners", &self.listeners.len())
            .field("pending_redraws", &self.pending_redraws)
            .finish()
    }
}
