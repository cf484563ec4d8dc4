//! Path bar component (macOS Finder style).
//!
//! Displays the current directory's ancestor chain at the bottom of
//! the browser with clickable segments for navigation.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::NodeId;

stylance::import_crate_style!(css, "src/components/browser/pathbar.module.css");

/// Segment data for path bar rendering.
#[derive(Clone)]
struct PathSegment {
    id: NodeId,
    label: String,
    icon: icondata::Icon,
    /// The current directory renders disabled.
    is_current: bool,
}

#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Current path">
            {move || {
                let segments = ctx.explorer.with(|ex| {
                    let chain = ex.ancestors();
                    let last = chain.len().saturating_sub(1);
                    chain
                        .into_iter()
                        .enumerate()
                        .map(|(idx, id)| {
                            let raw = ex.tree().name(id);
                            PathSegment {
                                id,
                                label: if raw.is_empty() { "/".to_string() } else { raw.to_string() },
                                icon: if idx == 0 { ic::HOME } else { ic::FOLDER },
                                is_current: idx == last,
                            }
                        })
                        .collect::<Vec<_>>()
                });

                let views: Vec<_> = segments
                    .into_iter()
                    .enumerate()
                    .map(|(idx, seg)| {
                        let show_separator = idx > 0;
                        view! {
                            <>
                                {show_separator.then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {if seg.is_current {
                                    view! {
                                        <SegmentCurrent icon=seg.icon label=seg.label.clone() />
                                    }.into_any()
                                } else {
                                    let target = seg.id;
                                    view! {
                                        <SegmentLink
                                            icon=seg.icon
                                            label=seg.label.clone()
                                            on_click=move || {
                                                ctx.explorer.update(|ex| ex.navigate(target));
                                            }
                                        />
                                    }.into_any()
                                }}
                            </>
                        }
                    })
                    .collect();

                views.collect_view().into_any()
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class=css::segment
            on:click=move |_| on_click()
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
