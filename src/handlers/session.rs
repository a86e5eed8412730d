//! Session Change Handler
//!
//! Mirrors the published session into the model. The mounted stack is derived
//! from `model.session` at render time, so all that is left here is resetting
//! per-stack state when the stack flips.

use crate::App;
use dasper::logic::navigation::stack_changed;
use dasper::model::SessionState;

pub fn handle_session_change(app: &mut App, next: SessionState) {
    let previous = std::mem::replace(&mut app.model.session, next);

    tracing::debug!(
        from = previous.as_str(),
        to = app.model.session.as_str(),
        "Session changed"
    );

    if !stack_changed(&previous, &app.model.session) {
        // Same stack, e.g. a profile refresh: keep the user where they are
        return;
    }

    // Stack flipped: nothing from the old stack survives
    app.model.ui.close_all_modals();
    app.model.ui.profile_form = None;
    app.model.ui.reset_auth_forms();
    app.model.navigation.reset_auth();
    app.model.navigation.reset_main();
}
