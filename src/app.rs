use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::{LandingPage, NotFoundPage};

/// Server-provided page metadata that only the HTML shell needs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteMeta {
    /// Emitted as `<link rel="canonical">` when set
    pub canonical_url: Option<String>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let canonical_url = use_context::<SiteMeta>().and_then(|meta| meta.canonical_url);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                {canonical_url.map(|href| view! { <link rel="canonical" href=href/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/video-insights.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
