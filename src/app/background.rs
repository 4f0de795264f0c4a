use leptos::prelude::*;

/// Slowly panning gradient behind the page. `subtle` drops the conic
/// highlight for use under the portfolio panel.
#[component]
pub fn AnimatedBackground(#[prop(optional)] subtle: bool) -> impl IntoView {
    view! {
        <div class="absolute inset-0 -z-10 overflow-hidden pointer-events-none">
            <div class="absolute -inset-[20%] bg-[radial-gradient(circle_at_20%_20%,rgba(94,234,212,0.25),transparent_40%),radial-gradient(circle_at_80%_30%,rgba(192,132,252,0.25),transparent_40%),radial-gradient(circle_at_30%_80%,rgba(147,197,253,0.25),transparent_40%)] animate-slow-pan" />
            {(!subtle)
                .then(|| {
                    view! {
                        <div class="absolute inset-0 bg-[conic-gradient(from_180deg_at_50%_50%,rgba(255,255,255,0.12),transparent_30%)] mix-blend-overlay" />
                    }
                })}
        </div>
    }
}
