//! Card action glue
//!
//! Browser side of the dispatcher: alerts, confirm dialogs, navigation and
//! reloading after a successful mutation.

use food_listing::{dispatch, Action, ActionError, ActionOutcome};
use leptos::prelude::window;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::context::AppContext;

const LOGIN_PAGE: &str = "login.html";

fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

fn navigate(href: &str) {
    if let Err(err) = window().location().set_href(href) {
        warn!(?err, href, "navigation failed");
    }
}

fn confirm_prompt(action: &Action, title: &str) -> String {
    match action {
        Action::Reserve { .. } => format!("هل تريد حجز \"{}\"؟", title),
        Action::ConfirmPickup { .. } => format!("تأكيد استلام \"{}\"؟", title),
        Action::ContactDonor { phone } => {
            format!("هل تريد الاتصال بالمطعم على الرقم:\n\n{}؟", phone.trim())
        }
    }
}

fn report(err: ActionError) {
    match err {
        ActionError::NotLoggedIn => {
            alert("يجب تسجيل الدخول أولاً");
            navigate(LOGIN_PAGE);
        }
        ActionError::MissingPhone => alert("رقم الهاتف غير متوفر"),
        other => {
            warn!(%other, "action failed");
            alert(&format!("حدث خطأ: {}", other));
        }
    }
}

/// Authorize, confirm and run a card action
pub fn run_action(ctx: AppContext, action: Action, title: String) {
    let session = ctx.session();
    if let Err(err) = action.authorize(&session) {
        report(err);
        return;
    }
    if !confirm(&confirm_prompt(&action, &title)) {
        return;
    }

    let loader = ctx.loader();
    let notes = ctx.reservation_notes();
    spawn_local(async move {
        match dispatch(loader.api(), &session, &action, &notes).await {
            Ok(ActionOutcome::Call { href }) => navigate(&href),
            Ok(outcome) => {
                info!(?outcome, "action completed");
                match outcome {
                    ActionOutcome::Reserved(_) => alert("تم حجز الطعام بنجاح"),
                    ActionOutcome::PickupConfirmed { .. } => alert("تم تأكيد الاستلام"),
                    ActionOutcome::Call { .. } => {}
                }
                if outcome.needs_reload() {
                    ctx.reload();
                }
            }
            Err(err) => report(err),
        }
    });
}
