//! Virtualized file grid.
//!
//! [`VirtualList`] is the generic windowing component: it owns the
//! scroll observation, asks the core [`Virtualizer`] which row indices
//! intersect the viewport, and materializes only those rows, each
//! absolute-positioned at `index * row_height` inside a spacer that
//! spans the full extent. [`FileGrid`] instantiates it over the
//! explorer's row groups and wires tile clicks into the selection
//! model.

use std::hash::Hash;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::grid;
use crate::core::{ClickModifiers, NodeId, Viewport, Virtualizer};
use crate::models::FileKind;
use crate::utils::dom::event_target_element;

stylance::import_crate_style!(css, "src/components/browser/grid.module.css");

/// Translate a pointer event's modifier keys into selection modifiers.
///
/// Ctrl (or cmd on macOS) toggles, shift extends a range.
fn click_modifiers(event: &ev::MouseEvent) -> ClickModifiers {
    ClickModifiers {
        toggle: event.ctrl_key() || event.meta_key(),
        range: event.shift_key(),
    }
}

/// Pick a tile icon from the item kind and file extension.
fn item_icon(is_dir: bool, ext: &str) -> icondata::Icon {
    if is_dir {
        ic::FOLDER
    } else {
        match FileKind::from_ext(ext) {
            FileKind::Text => ic::FILE_TEXT,
            FileKind::Image => ic::FILE_IMAGE,
            FileKind::Pdf => ic::FILE_PDF,
            FileKind::Unknown => ic::FILE,
        }
    }
}

/// Generic windowed list over uniform-height rows.
///
/// Renders the rows reported by `layout.window(...)` for the current
/// scroll position and viewport height, re-running the layout pass on
/// scroll and window resize. Rows outside the window (plus overscan)
/// are not materialized at all.
#[component]
pub fn VirtualList<T, F, V>(
    /// Full ordered row sequence; may change length between passes.
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Windowing parameters (row height, overscan).
    layout: Virtualizer,
    /// Renders one row; receives the row index for positioning context.
    render_row: F,
) -> impl IntoView
where
    T: Clone + Eq + Hash + Send + Sync + 'static,
    F: Fn(usize, T) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let scroller = NodeRef::<Div>::new();
    let (viewport, set_viewport) = signal(Viewport {
        scroll_top: 0.0,
        height: grid::FALLBACK_VIEWPORT_PX,
    });

    // Measure the real viewport once the container exists.
    Effect::new(move |_| {
        if let Some(el) = scroller.get() {
            set_viewport.update(|vp| vp.height = el.client_height() as f64);
        }
    });

    // Re-measure on window resize (runs once on mount).
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        use crate::utils::dom::window;

        let closure = Closure::wrap(Box::new(move || {
            if let Some(el) = scroller.get_untracked() {
                set_viewport.update(|vp| vp.height = el.client_height() as f64);
            }
        }) as Box<dyn Fn()>);

        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let on_scroll = move |event: web_sys::Event| {
        if let Some(el) = event_target_element(&event) {
            set_viewport.update(|vp| vp.scroll_top = el.scroll_top() as f64);
        }
    };

    // The visible slice, recomputed per layout pass from the current
    // row count so stale positions cannot survive a deletion.
    let visible = Memo::new(move |_| {
        let vp = viewport.get();
        rows.with(|rows| {
            let win = layout.window(rows.len(), vp);
            rows[win.start..win.end]
                .iter()
                .cloned()
                .enumerate()
                .map(|(offset, row)| (win.start + offset, row))
                .collect::<Vec<_>>()
        })
    });
    let total_height = Signal::derive(move || rows.with(|rows| layout.total_height(rows.len())));

    view! {
        <div class=css::scroller node_ref=scroller on:scroll=on_scroll>
            <div
                class=css::canvas
                style=move || format!("height:{}px", total_height.get())
            >
                <For
                    each=move || visible.get()
                    // The key carries the row contents, not just the
                    // position: a mutation that changes what lives at a
                    // stable index must rebuild that row's view.
                    key=|(index, row)| (*index, row.clone())
                    children={
                        let render_row = render_row.clone();
                        move |(index, row)| {
                            view! {
                                <div
                                    class=css::row
                                    style=format!(
                                        "top:{}px;height:{}px",
                                        layout.row_offset(index),
                                        layout.row_height,
                                    )
                                >
                                    {render_row(index, row)}
                                </div>
                            }
                        }
                    }
                />
            </div>
        </div>
    }
}

/// The browser's item grid: explorer row groups fed through
/// [`VirtualList`].
#[component]
pub fn FileGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let layout = Virtualizer::new(grid::ROW_HEIGHT_PX, grid::OVERSCAN_ROWS);
    let rows = Signal::derive(move || ctx.explorer.with(|ex| ex.rows(grid::ITEMS_PER_ROW)));

    // Clicks that reach the container hit empty space (tiles stop
    // propagation) and deselect everything.
    let on_background_click = move |_: ev::MouseEvent| {
        ctx.explorer.update(|ex| ex.clear_selection());
    };

    let render_row = |_, items: Vec<NodeId>| view! { <GridRow items=items /> };

    view! {
        <div
            class=css::grid
            role="grid"
            aria-label="File grid"
            on:click=on_background_click
        >
            <VirtualList rows=rows layout=layout render_row=render_row />
        </div>
    }
}

/// One fixed-size row group of tiles, laid out horizontally.
#[component]
fn GridRow(items: Vec<NodeId>) -> impl IntoView {
    view! {
        <div class=css::rowGroup role="row">
            <For
                each=move || items.clone()
                key=|id| *id
                children=|id| view! { <FileTile id=id /> }
            />
        </div>
    }
}

/// A single file or directory tile.
///
/// Single click routes into the selection model with the event's
/// modifier keys; double click navigates into directories.
#[component]
fn FileTile(id: NodeId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Kind never changes after creation; name and extension can move
    // under a rename, so those stay reactive.
    let is_dir = ctx.explorer.with_untracked(|ex| ex.tree().kind(id).is_dir());
    let name = Signal::derive(move || ctx.explorer.with(|ex| ex.tree().name(id).to_string()));
    let path = Signal::derive(move || ctx.explorer.with(|ex| ex.tree().path(id)));
    let icon = Signal::derive(move || {
        ctx.explorer
            .with(|ex| item_icon(is_dir, ex.tree().ext(id)))
    });
    let is_selected = Signal::derive(move || ctx.explorer.with(|ex| ex.selected(id)));

    let on_click = move |event: ev::MouseEvent| {
        event.stop_propagation();
        let modifiers = click_modifiers(&event);
        ctx.explorer.update(|ex| ex.click(id, modifiers));
    };
    let on_dblclick = move |_: ev::MouseEvent| {
        if is_dir {
            ctx.explorer.update(|ex| ex.navigate(id));
        }
    };

    let tile_class = move || {
        if is_selected.get() {
            format!("{} {}", css::tile, css::tileSelected)
        } else {
            css::tile.to_string()
        }
    };
    let aria_label = move || {
        if is_dir {
            format!("Folder: {}", name.get())
        } else {
            format!("File: {}", name.get())
        }
    };

    view! {
        <div
            class=tile_class
            on:click=on_click
            on:dblclick=on_dblclick
            role="gridcell"
            tabindex="0"
            title=move || path.get()
            aria-label=aria_label
            aria-selected=move || is_selected.get()
        >
            <span class=css::tileIcon aria-hidden="true">
                {move || view! { <Icon icon=icon.get() /> }}
            </span>
            <span class=css::tileName>{move || name.get()}</span>
        </div>
    }
}
