//! Session-gated navigation
//!
//! Pure functions deciding which screen stack is mounted. The decision is
//! level-triggered: it is recomputed from the current session on every frame
//! and has no intermediate "switching" state.

use crate::model::{RootView, SessionState, StackId};

/// Select the stack to mount for a session
///
/// `MainStack` only for a positively confirmed `Authenticated` state; every
/// other state, `Unknown` included, gets `AuthStack`.
///
/// # Examples
/// ```
/// use dasper::logic::navigation::select_stack;
/// use dasper::model::{SessionState, StackId};
///
/// assert_eq!(select_stack(&SessionState::Unknown), StackId::AuthStack);
/// assert_eq!(select_stack(&SessionState::Unauthenticated), StackId::AuthStack);
/// ```
pub fn select_stack(session: &SessionState) -> StackId {
    match session {
        SessionState::Authenticated(_) => StackId::MainStack,
        SessionState::Unknown | SessionState::Unauthenticated => StackId::AuthStack,
    }
}

/// What the frame shows: the splash while it is visible, otherwise the stack
pub fn root_view(splash_visible: bool, session: &SessionState) -> RootView {
    if splash_visible {
        RootView::Splash
    } else {
        RootView::Stack(select_stack(session))
    }
}

/// Whether moving from `previous` to `next` remounts a different stack
pub fn stack_changed(previous: &SessionState, next: &SessionState) -> bool {
    select_stack(previous) != select_stack(next)
}
