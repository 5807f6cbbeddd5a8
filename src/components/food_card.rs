//! Food Card Component
//!
//! One card from the renderer's `FoodCard` description.

use food_listing::{ActionButton, FoodCard};
use leptos::prelude::*;

use crate::actions::run_action;
use crate::context::{use_app_context, AppContext};

fn info_row(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-item">
            <i class=icon></i>
            <span><strong>{label}</strong>" "{value}</span>
        </div>
    }
}

fn action_button(ctx: AppContext, button: ActionButton, title: String) -> impl IntoView {
    let ActionButton {
        label,
        icon,
        class,
        action,
    } = button;
    let disabled = action.is_none();

    view! {
        <button
            class=format!("btn-food {}", class)
            disabled=disabled
            on:click=move |_| {
                if let Some(action) = action.clone() {
                    run_action(ctx, action, title.clone());
                }
            }
        >
            <i class=icon></i>
            " "
            {label}
        </button>
    }
}

/// Rendered food card
#[component]
pub fn FoodCardView(card: FoodCard) -> impl IntoView {
    let ctx = use_app_context();
    let FoodCard {
        status,
        status_label,
        status_class,
        title,
        category,
        quantity,
        location,
        donor_name,
        donor_phone,
        expiry,
        time_left,
        expiry_warning,
        actions,
        ..
    } = card;

    let expiry_class = if expiry_warning {
        "food-expiry expiry-warning"
    } else {
        "food-expiry"
    };
    let buttons = actions
        .into_iter()
        .map(|button| action_button(ctx, button, title.clone()))
        .collect_view();

    view! {
        <div class="food-card" data-status=status>
            <div class=format!("food-status {}", status_class)>
                <span>{status_label}</span>
                <span class="food-type">{category}</span>
            </div>
            <div class="food-details">
                <div class="food-title">
                    <h3>{title}</h3>
                </div>
                <div class="food-info">
                    {info_row("fas fa-weight", "الكمية:", quantity)}
                    {info_row("fas fa-map-marker-alt", "الموقع:", location)}
                    {info_row("fas fa-hotel", "المتبرع:", donor_name)}
                    {info_row("fas fa-phone", "الهاتف:", donor_phone)}
                </div>
                <div class=expiry_class>
                    <div class="expiry-text">
                        <i class="fas fa-clock"></i>
                        <span>
                            <strong>"الصلاحية:"</strong>
                            {format!(" {} - {}", expiry, time_left)}
                        </span>
                    </div>
                </div>
            </div>
            <div class="food-actions">{buttons}</div>
        </div>
    }
}
