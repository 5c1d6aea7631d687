use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::components::search_panel::SearchPanel;
use crate::components::upload_form::UploadForm;
use crate::config::ClientConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(page_config());

    view! {
        <Title text="Claim Desk"/>

        <Router>
            <nav class="top-nav">
                <div class="logo">"Claim Desk"</div>
                <A href="/">"Upload"</A>
                <A href="/search">"Search"</A>
            </nav>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=UploadPage/>
                    <Route path=path!("/search") view=SearchPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <h1>"Upload a claim document"</h1>
        <UploadForm/>
    }
}

#[component]
fn SearchPage() -> impl IntoView {
    view! {
        <h1>"Search documents by community"</h1>
        <SearchPanel/>
    }
}

/// The UI talks to the server that served the page.
fn page_config() -> ClientConfig {
    window()
        .location()
        .origin()
        .ok()
        .and_then(|origin| ClientConfig::new(&origin).ok())
        .unwrap_or_default()
}
