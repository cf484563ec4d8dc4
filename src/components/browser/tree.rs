//! Directory tree sidebar.
//!
//! Recursive directory-only tree with expand/collapse chevrons.
//! Expansion state lives in the view model's expanded set; clicking a
//! directory label navigates the browser into it.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::NodeId;

stylance::import_crate_style!(css, "src/components/browser/tree.module.css");

#[component]
pub fn DirTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let root = ctx.explorer.with_untracked(|ex| ex.tree().root());

    view! {
        <nav class=css::tree aria-label="Folders">
            <DirNode id=root depth=0 />
        </nav>
    }
}

/// One directory row plus, when expanded, its subdirectories.
#[component]
fn DirNode(id: NodeId, depth: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let label = Signal::derive(move || {
        ctx.explorer.with(|ex| {
            let raw = ex.tree().name(id);
            if raw.is_empty() {
                "/".to_string()
            } else {
                raw.to_string()
            }
        })
    });
    let is_expanded = Signal::derive(move || ctx.explorer.with(|ex| ex.expanded(id)));
    let is_cwd = Signal::derive(move || ctx.explorer.with(|ex| ex.cwd() == id));
    let subdirs = Signal::derive(move || {
        ctx.explorer.with(|ex| {
            ex.tree()
                .children(id)
                .into_iter()
                .filter(|child| ex.tree().is_dir(*child))
                .collect::<Vec<_>>()
        })
    });
    let has_subdirs = Signal::derive(move || !subdirs.get().is_empty());

    let on_toggle = move |event: ev::MouseEvent| {
        event.stop_propagation();
        ctx.explorer.update(|ex| ex.toggle_expanded(id, None));
    };
    let on_open = move |_: ev::MouseEvent| {
        ctx.explorer.update(|ex| ex.navigate(id));
    };

    let row_class = move || {
        if is_cwd.get() {
            format!("{} {}", css::nodeRow, css::nodeCurrent)
        } else {
            css::nodeRow.to_string()
        }
    };

    view! {
        <div class=css::node>
            <div
                class=row_class
                style=format!("padding-left:{}rem", depth)
                on:click=on_open
            >
                <Show
                    when=move || has_subdirs.get()
                    fallback=|| view! { <span class=css::chevronSpacer></span> }
                >
                    <button
                        class=css::chevron
                        on:click=on_toggle
                        aria-expanded=move || is_expanded.get()
                        title="Expand or collapse"
                    >
                        {move || if is_expanded.get() {
                            view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                        }}
                    </button>
                </Show>
                <span class=css::nodeIcon>
                    {move || if is_expanded.get() {
                        view! { <Icon icon=ic::FOLDER_OPEN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::FOLDER /> }.into_any()
                    }}
                </span>
                <span class=css::nodeLabel>{move || label.get()}</span>
            </div>
            <Show when=move || is_expanded.get()>
                <For
                    each=move || subdirs.get()
                    key=|child| *child
                    children=move |child| {
                        view! { <DirNode id=child depth=depth + 1 /> }.into_any()
                    }
                />
            </Show>
        </div>
    }
}
