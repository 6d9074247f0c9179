use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::analysis::AnalysisPanel;
use crate::components::attendance::AttendanceNotifier;
use crate::components::footer::Footer;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
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
        <Stylesheet id="leptos" href="/pkg/learnsync.css" />
        <Title text="LearnSync" />
        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="w-full min-h-screen mx-auto bg-gray-100 dark:bg-teal-900">
            <div class="flex justify-between items-center">
                <a
                    href="/"
                    class="text-3xl text-right text-seafoam-600 dark:text-mint-400 pr-4 p-4 font-bold"
                >
                    "LearnSync"
                </a>
            </div>
            <AttendanceNotifier />
            <AnalysisPanel />
            <Footer />
        </div>
    }
}
