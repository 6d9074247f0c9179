use leptos::prelude::*;

use crate::models::records::AnalyzedRecord;
use crate::server_fn::analysis::fetch_analysis;

#[cfg(feature = "hydrate")]
macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into());
    };
}

#[cfg(not(feature = "hydrate"))]
macro_rules! console_log {
    ($($t:tt)*) => {
        log::info!($($t)*);
    };
}

pub const LOADING_MESSAGE: &str = "⏳ جاري التحليل...";
pub const RESULTS_HEADER: &str = "🔍 المحتوى المرتب:";
pub const ERROR_MESSAGE: &str = "❌ حصل خطأ أثناء الاتصال بالـ AI.";

/// Fetch-and-render panel for the analysis service. One request per click,
/// no retries; any failure collapses into the one fixed error message.
#[component]
pub fn AnalysisPanel() -> impl IntoView {
    let analyze = Action::new(|_: &()| async move { fetch_analysis().await });
    let pending = analyze.pending();

    view! {
        <div class="container mx-auto p-4 space-y-4 flex flex-col items-center">
            <button
                class="bg-teal-500 hover:bg-teal-600 text-white font-bold py-2 px-4 rounded transition-colors"
                on:click=move |_| {
                    console_log!("analysis requested");
                    analyze.dispatch(());
                }
            >
                "تحليل المحتوى بالذكاء الاصطناعي"
            </button>
            <div id="ai-result" class="w-full max-w-xl text-gray-800 dark:text-gray-200">
                {move || {
                    if pending.get() {
                        return view! { <p>{LOADING_MESSAGE}</p> }.into_any();
                    }
                    match analyze.value().get() {
                        None => view! { <div></div> }.into_any(),
                        Some(Ok(records)) => view! { <AnalysisResults records /> }.into_any(),
                        Some(Err(_)) => view! { <p class="text-salmon-600">{ERROR_MESSAGE}</p> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn AnalysisResults(records: Vec<AnalyzedRecord>) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-bold">{RESULTS_HEADER}</h3>
            <ul class="list-disc pr-6 space-y-1">
                {records
                    .into_iter()
                    .map(|record| view! { <li>{record.display_line()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_and_header_text_are_fixed() {
        assert_eq!(LOADING_MESSAGE, "⏳ جاري التحليل...");
        assert_eq!(RESULTS_HEADER, "🔍 المحتوى المرتب:");
    }

    #[test]
    fn test_single_error_message_for_all_failures() {
        assert_eq!(ERROR_MESSAGE, "❌ حصل خطأ أثناء الاتصال بالـ AI.");
    }
}
