//! Desktop surface and window framing.
//!
//! The desktop hosts application windows; the frame here is static
//! chrome (title bar label only) whose job is to carry content.
//! Dragging, stacking and resize geometry are styling-layer concerns
//! and carry no model state.

use leptos::prelude::*;

use crate::components::browser::Browser;
use crate::config;

stylance::import_crate_style!(css, "src/components/desktop/desktop.module.css");

/// Desktop surface with the file-browser window.
#[component]
pub fn Desktop() -> impl IntoView {
    view! {
        <div class=css::desktop aria-label=config::APP_NAME>
            <Window title=config::BROWSER_WINDOW_TITLE.to_string()>
                <Browser />
            </Window>
        </div>
    }
}

/// Static window frame hosting arbitrary content.
#[component]
fn Window(title: String, children: Children) -> impl IntoView {
    let label = title.clone();
    view! {
        <section class=css::window aria-label=label>
            <header class=css::titlebar>
                <span class=css::titleLabel>{title}</span>
            </header>
            <div class=css::windowBody>{children()}</div>
        </section>
    }
}
