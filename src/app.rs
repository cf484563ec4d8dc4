//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Desktop;
use crate::core::{ExplorerState, demo_tree};

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can
/// be accessed from any child component using
/// `use_context::<AppContext>()`.
///
/// # Mutation discipline
///
/// All browser state lives behind one signal; every mutation goes
/// through a single `update` closure, so views observe each committed
/// transaction atomically and in commit order. Related writes (e.g. a
/// deletion plus the selection rebuild it forces) share one closure.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Browser view model: tree, current directory, selection and
    /// expanded directories.
    pub explorer: RwSignal<ExplorerState>,
}

impl AppContext {
    /// Creates a new application context over a freshly seeded
    /// in-memory filesystem.
    pub fn new() -> Self {
        let tree = demo_tree(&mut rand::thread_rng());
        Self {
            explorer: RwSignal::new(ExplorerState::new(tree)),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Desktop component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    font-family: system-ui, sans-serif;
                ">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Desktop />
        </ErrorBoundary>
    }
}
