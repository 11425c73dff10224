//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::{contact::ContactFormState, gallery::GalleryState};

/// Root application component.
///
/// Provides the site config and both state contexts, then routes to the
/// single portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    log::debug!("site config: {config:?}");

    let contact = RwSignal::new(ContactFormState::default());
    let gallery = RwSignal::new(GalleryState::default());

    provide_context(config);
    provide_context(contact);
    provide_context(gallery);

    view! {
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
