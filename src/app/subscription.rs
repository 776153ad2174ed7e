// SPDX-License-Identifier: MPL-2.0
//! Tick subscriptions for the application.
//!
//! Two cadences cover every timed behavior: a fine tick (~60 fps) while an
//! animation is actually playing, and a coarse tick while only lifecycle
//! expirations (toast/alert windows, a pending debounce) are outstanding.
//! When the UI is quiescent there is no subscription at all, so no timer
//! can leak past the work it was created for.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{time, Subscription};

/// Creates the periodic tick subscription appropriate for the current
/// activity level.
pub fn create_tick_subscription(animating: bool, lifecycles_pending: bool) -> Subscription<Message> {
    if animating {
        time::every(motion::ANIMATION_TICK).map(Message::Tick)
    } else if lifecycles_pending {
        time::every(motion::LIFECYCLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
