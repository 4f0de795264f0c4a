use chrono::DateTime;
use leptos::prelude::*;

use crate::content::PROFILE;

const BUILT_WITH: &str = "Built with Rust + Leptos + Tailwind";

fn built_on() -> Option<String> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.format("%b %-d, %Y").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 max-w-6xl mx-auto px-6 pb-10 text-xs text-white/60">
            <div class="flex flex-wrap items-center gap-2">
                <span>{format!("© {} {}", env!("BUILD_YEAR"), PROFILE.name)}</span>
                <span class="hidden sm:inline">"•"</span>
                <span>{BUILT_WITH}</span>
                {built_on()
                    .map(|date| {
                        view! {
                            <span class="hidden sm:inline">"•"</span>
                            <span>{format!("Last built {date}")}</span>
                        }
                    })}
            </div>
        </footer>
    }
}
