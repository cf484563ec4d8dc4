//! Main browser component.
//!
//! Composes the toolbar, the directory sidebar, the virtualized file
//! grid and the path bar into the file-browser view hosted by the
//! desktop window.

use leptos::prelude::*;

use super::grid::FileGrid;
use super::pathbar::PathBar;
use super::toolbar::Toolbar;
use super::tree::DirTree;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    view! {
        <div class=css::browser>
            <Toolbar />

            <div class=css::body>
                <aside class=css::sidebar>
                    <DirTree />
                </aside>
                <section class=css::content>
                    <FileGrid />
                </section>
            </div>

            <PathBar />
        </div>
    }
}
