//! Landing page component
//!
//! Marketing page for VideoInsights:
//! - SEO meta tags and JSON-LD structured data
//! - Header with in-page navigation
//! - Hero with the mocked video preview and its playback toggle
//! - Feature grid with staggered entrance
//! - Analytics showcase with the two mount animations
//! - Call-to-action and footer with the newsletter form

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::animation::{
    chart_reveal_tween, path_reveal_style, watch_percentage_tween, width_style,
};
use crate::core::content::{
    self, ANALYTICS_SECTION_ID, BRAND_NAME, CHART_OVERLAY, CHART_PATH, CONTACT_SECTION_ID,
    FEATURES, FEATURES_SECTION_ID, FOOTER_LINKS, Feature, HEADER_LINKS, HERO_SUBTITLE, HERO_TITLE,
    PREVIEW_STATS, PreviewStat, StructuredData, TAGLINE,
};
use crate::ui::icon::Icon;
use crate::ui::mount_animation::use_mount_animation;
use crate::ui::playback_toggle::PlaybackToggle;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-gray-50 text-gray-800">
            <SiteHeader />
            <Hero />
            <FeaturesSection />
            <AnalyticsShowcase />
            <CallToAction />
            <SiteFooter />

            <LandingStyles />
        </div>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{BRAND_NAME} - Video Analytics");
    // Serializing a static struct can't realistically fail; skip the tag if it does
    let structured_data = StructuredData::for_landing_page().to_json_ld().ok();

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=HERO_SUBTITLE />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=HERO_SUBTITLE />

        {structured_data.map(|json| view! {
            <script type="application/ld+json" inner_html=json></script>
        })}
    }
}

#[component]
pub(crate) fn SiteHeader() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm">
            <nav class="container mx-auto px-4 py-4 flex justify-between items-center">
                <a href="/" class="text-2xl font-bold text-blue-600">{BRAND_NAME}</a>
                <ul class="flex space-x-4">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| view! {
                            <li>
                                <a href=link.href class="hover:text-blue-600 transition-colors">
                                    {link.label}
                                </a>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub(crate) fn Hero() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-20 text-center">
            <h1 class="text-5xl font-bold mb-6 landing-drop-in">{HERO_TITLE}</h1>
            <p class="text-xl mb-12 landing-drop-in landing-delay-200">{HERO_SUBTITLE}</p>

            // Video preview
            <div class="max-w-3xl mx-auto bg-white rounded-lg shadow-lg overflow-hidden">
                <div class="relative aspect-video bg-gray-200">
                    <div class="absolute inset-0 flex items-center justify-center z-10">
                        <PlaybackToggle />
                    </div>
                    // Simulated heat map overlay
                    <div
                        class="absolute inset-0 bg-gradient-to-br from-red-500/30 via-yellow-500/30 to-green-500/30 opacity-60"
                        aria-hidden="true"
                    ></div>
                </div>

                <div class="bg-white p-4 flex justify-between items-center">
                    {PREVIEW_STATS.iter().copied().map(|stat| view! { <PreviewFigure stat=stat /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PreviewFigure(stat: PreviewStat) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            {stat.icon.map(|icon| view! { <Icon kind=icon.into() class=stat.icon_class /> })}
            <span>{stat.label}</span>
        </div>
    }
}

#[component]
pub(crate) fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=FEATURES_SECTION_ID class="bg-white py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Powerful Analytics Features"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let delay = format!("animation-delay: {}ms", Feature::entrance_delay_ms(index));

    view! {
        <div class="bg-gray-50 p-6 rounded-lg shadow-md landing-rise-in" style=delay>
            <Icon kind=feature.icon.into() class="text-blue-600 w-12 h-12 mb-4" />
            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </div>
    }
}

#[component]
pub(crate) fn AnalyticsShowcase() -> impl IntoView {
    view! {
        <section id=ANALYTICS_SECTION_ID class="py-20 bg-gray-100">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Dynamic Video Analytics in Action"</h2>
                <div class="flex flex-col md:flex-row justify-between items-center space-y-12 md:space-y-0 md:space-x-8">
                    <WatchPercentageBar />
                    <EngagementChart />
                </div>
            </div>
        </section>
    }
}

/// Progress bar that fills to 80% once after mount
#[component]
fn WatchPercentageBar() -> impl IntoView {
    let animation = use_mount_animation(watch_percentage_tween());

    view! {
        <div class="w-full md:w-1/2">
            <h3 class="text-xl font-semibold mb-4">"Watch Percentage Over Time"</h3>
            <div class="bg-gray-200 h-8 rounded-full overflow-hidden">
                <div
                    class="bg-blue-600 h-full rounded-full"
                    data-animation="watch-percentage"
                    data-phase=move || animation.phase.get().as_str()
                    style=move || width_style(animation.value.get())
                ></div>
            </div>
            <div class="mt-2 text-sm text-gray-600">
                "Watch percentage reaches 80% as viewers engage with the video"
            </div>
        </div>
    }
}

/// Area chart whose outline is traced once after mount
#[component]
fn EngagementChart() -> impl IntoView {
    let animation = use_mount_animation(chart_reveal_tween());

    view! {
        <div class="w-full md:w-1/2">
            <h3 class="text-xl font-semibold mb-4">"Video Engagement Chart"</h3>
            <div class="relative aspect-video bg-white rounded-lg overflow-hidden shadow-md">
                <div class="absolute top-2 left-2 text-xs text-gray-500">
                    {CHART_OVERLAY.iter().map(|line| view! { <div>{*line}</div> }).collect_view()}
                </div>
                <svg
                    class="absolute inset-0 w-full h-full"
                    viewBox="0 0 100 100"
                    preserveAspectRatio="none"
                    aria-hidden="true"
                >
                    // Axes
                    <line x1="0" y1="100" x2="100" y2="100" stroke="#e5e7eb" stroke-width="0.5" />
                    <line x1="0" y1="0" x2="0" y2="100" stroke="#e5e7eb" stroke-width="0.5" />

                    <defs>
                        <linearGradient id="areaGradient" x1="0%" y1="0%" x2="0%" y2="100%">
                            <stop offset="0%" stop-color="rgba(59, 130, 246, 0.5)" />
                            <stop offset="100%" stop-color="rgba(59, 130, 246, 0.1)" />
                        </linearGradient>
                    </defs>
                    <path
                        d=CHART_PATH
                        fill="url(#areaGradient)"
                        stroke="rgb(59, 130, 246)"
                        stroke-width="1.5"
                        pathLength="1"
                        data-animation="chart-reveal"
                        data-phase=move || animation.phase.get().as_str()
                        style=move || path_reveal_style(animation.value.get())
                    />
                </svg>
            </div>
            <div class="mt-2 text-sm text-gray-600">
                "Engagement chart shows viewer retention over time"
            </div>
        </div>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="bg-blue-600 text-white py-20">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-6">"Ready to Optimize Your Video Content?"</h2>
                <p class="text-xl mb-8">
                    "Start analyzing your videos today and drive better engagement"
                </p>
                <button
                    type="button"
                    class="landing-press bg-white text-blue-600 px-8 py-3 rounded-full font-semibold text-lg shadow-lg"
                >
                    "Get Started Free"
                </button>
            </div>
        </section>
    }
}

/// Footer component
#[component]
pub(crate) fn SiteFooter() -> impl IntoView {
    let copyright = content::copyright_notice(content::current_year());

    view! {
        <footer id=CONTACT_SECTION_ID class="bg-gray-800 text-white py-8">
            <div class="container mx-auto px-4">
                <div class="flex flex-wrap justify-between">
                    <div class="w-full md:w-1/3 mb-6 md:mb-0">
                        <h3 class="text-2xl font-bold mb-4">{BRAND_NAME}</h3>
                        <p class="text-gray-400">{TAGLINE}</p>
                    </div>
                    <div class="w-full md:w-1/3 mb-6 md:mb-0">
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .iter()
                                .map(|link| view! {
                                    <li>
                                        <a href=link.href class="text-gray-400 hover:text-white transition-colors">
                                            {link.label}
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="w-full md:w-1/3">
                        <h4 class="text-lg font-semibold mb-4">"Stay Connected"</h4>
                        <p class="text-gray-400 mb-4">
                            "Subscribe to our newsletter for the latest updates"
                        </p>
                        <NewsletterForm />
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-gray-700 text-center text-gray-400">
                    <p>{copyright}</p>
                </div>
            </div>
        </footer>
    }
}

/// Newsletter signup; submission is left to the browser, nothing is validated
#[component]
fn NewsletterForm() -> impl IntoView {
    view! {
        <form class="flex">
            <input
                type="email"
                placeholder="Enter your email"
                class="bg-gray-700 text-white px-4 py-2 rounded-l-full w-2/3"
                aria-label="Email for newsletter"
            />
            <button class="bg-blue-600 text-white px-4 py-2 rounded-r-full" type="submit">
                "Subscribe"
            </button>
        </form>
    }
}

/// CSS for entrance transitions and button feedback
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes landing-drop-in {
                from { opacity: 0; transform: translateY(-20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes landing-rise-in {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .landing-drop-in {
                animation: landing-drop-in 0.5s ease both;
            }
            .landing-rise-in {
                animation: landing-rise-in 0.5s ease both;
            }
            .landing-delay-200 {
                animation-delay: 200ms;
            }

            /* Button feedback */
            .landing-press,
            .landing-press-lg {
                transition: transform 0.2s;
                cursor: pointer;
            }
            .landing-press:hover { transform: scale(1.05); }
            .landing-press:active { transform: scale(0.95); }
            .landing-press-lg:hover { transform: scale(1.1); }
            .landing-press-lg:active { transform: scale(0.9); }

            @media (prefers-reduced-motion: reduce) {
                .landing-drop-in,
                .landing-rise-in {
                    animation: none;
                }
            }
            "#
        </style>
    }
}
