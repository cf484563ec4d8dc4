//! Browser toolbar.
//!
//! Name input plus the create / rename / delete actions. The input
//! gates creation on name availability in the current directory, so
//! most `InvalidArgument` cases never reach the core; the core defends
//! its invariants independently either way.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ItemKind;

stylance::import_crate_style!(css, "src/components/browser/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (name, set_name) = signal(String::new());

    let name_ok = Signal::derive(move || {
        let value = name.get();
        let trimmed = value.trim();
        !trimmed.is_empty() && ctx.explorer.with(|ex| ex.is_name_available(trimmed))
    });
    let has_selection = Signal::derive(move || ctx.explorer.with(|ex| !ex.selection().is_empty()));
    let single_selection =
        Signal::derive(move || ctx.explorer.with(|ex| ex.selection().len() == 1));

    // Shared by the two create buttons.
    let create = move |kind: ItemKind| {
        let value = name.get_untracked();
        let trimmed = value.trim().to_string();
        ctx.explorer.update(|ex| {
            // Availability is re-checked inside the same transaction as
            // the attach; the check and the add are still not atomic
            // against reentrant callers.
            if trimmed.is_empty() || !ex.is_name_available(&trimmed) {
                return;
            }
            match ex.create(kind, &trimmed) {
                Ok(item) => {
                    let cwd = ex.cwd();
                    if let Err(_err) = ex.add(cwd, item) {
                        #[cfg(target_arch = "wasm32")]
                        web_sys::console::warn_1(&format!("create failed: {_err}").into());
                    }
                }
                Err(_err) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("create failed: {_err}").into());
                }
            }
        });
        set_name.set(String::new());
    };

    let on_rename = move |_: ev::MouseEvent| {
        let value = name.get_untracked();
        let trimmed = value.trim().to_string();
        ctx.explorer.update(|ex| {
            if trimmed.is_empty() || !ex.is_name_available(&trimmed) {
                return;
            }
            let item = ex.selection().items().first().copied();
            if let Some(item) = item {
                if let Err(_err) = ex.rename(item, &trimmed) {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("rename failed: {_err}").into());
                }
            }
        });
        set_name.set(String::new());
    };

    let on_delete = move |_: ev::MouseEvent| {
        ctx.explorer.update(|ex| ex.delete_selection());
    };

    view! {
        <div class=css::toolbar role="toolbar" aria-label="Browser actions">
            <input
                class=css::nameInput
                type="text"
                placeholder="New name"
                prop:value=name
                on:input=move |event| set_name.set(event_target_value(&event))
            />
            <button
                class=css::button
                on:click=move |_| create(ItemKind::File)
                disabled=move || !name_ok.get()
                title="Create file"
            >
                <Icon icon=ic::PLUS />
                <span class=css::buttonLabel>"File"</span>
            </button>
            <button
                class=css::button
                on:click=move |_| create(ItemKind::Directory)
                disabled=move || !name_ok.get()
                title="Create folder"
            >
                <Icon icon=ic::PLUS />
                <span class=css::buttonLabel>"Folder"</span>
            </button>
            <button
                class=css::button
                on:click=on_rename
                disabled=move || !(single_selection.get() && name_ok.get())
                title="Rename selected item"
            >
                <Icon icon=ic::EDIT />
                <span class=css::buttonLabel>"Rename"</span>
            </button>
            <span class=css::spacer></span>
            <button
                class=css::button
                on:click=on_delete
                disabled=move || !has_selection.get()
                title="Delete selection"
            >
                <Icon icon=ic::TRASH />
                <span class=css::buttonLabel>"Delete"</span>
            </button>
        </div>
    }
}
