//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::{self, BRAND_NAME};
use crate::ui::icon::{Icon, IconKind};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        // Tell the server to answer with a real 404 status
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    let copyright = content::copyright_notice(content::current_year());

    view! {
        <Title text=format!("Page Not Found - {BRAND_NAME}") />

        <div class="min-h-screen bg-gray-50 text-gray-800 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white shadow-md rounded-full flex items-center justify-center">
                    <Icon kind=IconKind::BarChart class="w-12 h-12 text-blue-600" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-full transition-colors"
                >
                    "Go Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-400">{copyright}</p>
            </div>
        </div>
    }
}
