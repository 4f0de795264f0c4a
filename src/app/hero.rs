use leptos::prelude::*;

use super::cards::{BadgeChip, StatTile};
use crate::content::{BADGES, INTRO, PROFILE_POINTS, STATS};
use crate::view_state::ViewState;

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    view! {
        <main class="relative z-10 max-w-6xl mx-auto px-6 pt-10 pb-24">
            <div class="grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h2 class="text-4xl sm:text-5xl font-black leading-[1.1]">
                        "Curious & driven "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-300 to-violet-400">
                            "Junior Developer"
                        </span>
                    </h2>
                    <p class="mt-4 text-white/80">{INTRO}</p>

                    <div class="mt-8 flex flex-wrap items-center gap-4">
                        <button
                            on:click=move |_| state.update(ViewState::open_portfolio)
                            class="px-5 py-3 rounded-2xl bg-white text-slate-900 font-semibold shadow-lg hover:shadow-xl active:scale-[0.99] transition"
                        >
                            "Open portfolio"
                        </button>
                        <button
                            on:click=move |_| state.update(ViewState::open_contact)
                            class="px-5 py-3 rounded-2xl border border-white/20 text-white hover:bg-white/10 transition"
                        >
                            "Contact me"
                        </button>
                    </div>

                    <div class="mt-10 grid grid-cols-2 sm:grid-cols-3 gap-3 text-sm">
                        {BADGES.iter().map(|badge| view! { <BadgeChip badge=*badge /> }).collect_view()}
                    </div>
                </div>

                <div class="relative h-[380px] sm:h-[460px]">
                    <div class="absolute inset-0 rounded-3xl bg-gradient-to-br from-white/10 to-white/5 backdrop-blur-md border border-white/10 shadow-2xl p-6">
                        <h3 class="text-lg font-semibold mb-3">"Profile"</h3>
                        <ul class="space-y-3 text-white/80 text-sm leading-relaxed">
                            {PROFILE_POINTS.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                        </ul>
                        <div class="mt-6 grid grid-cols-3 gap-2 text-xs text-white/70">
                            {STATS.iter().map(|stat| view! { <StatTile stat=*stat /> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}
