// SPDX-License-Identifier: MPL-2.0
//! Native confirm dialogs.
//!
//! These block the UI thread until the user answers, which is exactly the
//! contract inline callers rely on: the boolean gates whatever destructive
//! action triggered the dialog.

use crate::i18n::fluent::I18n;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Asks the user to confirm a deletion. `message` overrides the default
/// wording.
#[must_use]
pub fn confirm_delete(i18n: &I18n, message: Option<&str>) -> bool {
    let default = i18n.tr("confirm-delete-default");
    confirm(i18n, message.unwrap_or(&default), MessageLevel::Warning)
}

/// Asks the user to confirm a generic action. `message` overrides the
/// default wording.
#[must_use]
pub fn confirm_action(i18n: &I18n, message: Option<&str>) -> bool {
    let default = i18n.tr("confirm-action-default");
    confirm(i18n, message.unwrap_or(&default), MessageLevel::Info)
}

fn confirm(i18n: &I18n, message: &str, level: MessageLevel) -> bool {
    let result = MessageDialog::new()
        .set_level(level)
        .set_title(i18n.tr("confirm-title"))
        .set_description(message)
        .set_buttons(MessageButtons::YesNo)
        .show();

    result == MessageDialogResult::Yes
}
