use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="flex flex-row pr-4 p-4 space-x-2 text-teal-400 dark:text-teal-600">
            <span>"learn"</span>
            <span>"•"</span>
            <span>"sync"</span>
        </div>
    }
}
