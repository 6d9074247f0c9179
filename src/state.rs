use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::extract::FromRef;
        use leptos::prelude::LeptosOptions;

        use crate::config::AnalysisConfig;

        #[derive(FromRef, Clone)]
        pub struct AppState {
            pub leptos_options: LeptosOptions,
            pub analysis: AnalysisConfig,
        }

        impl AppState {
            pub fn new(leptos_options: LeptosOptions) -> Self {
                Self {
                    leptos_options,
                    analysis: AnalysisConfig::from_env(),
                }
            }
        }
    }
}
