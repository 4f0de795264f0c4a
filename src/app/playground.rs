use leptos::prelude::*;

use crate::playground::{filter, Counter, BASIC_SKILLS};

#[component]
pub fn Playground() -> impl IntoView {
    let (counter, set_counter) = signal(Counter::default());
    let (query, set_query) = signal(String::new());

    view! {
        <div class="grid gap-4">
            <div class="flex items-center gap-3 text-sm">
                <button
                    on:click=move |_| set_counter.update(Counter::increment)
                    class="px-3 py-2 rounded-lg bg-white text-slate-900"
                >
                    "+1"
                </button>
                <span class="text-white/80">"Counter: " {move || counter.with(Counter::get)}</span>
            </div>
            <div class="text-sm">
                <label for="skill_filter" class="block mb-2">
                    "Filter skills:"
                </label>
                <input
                    id="skill_filter"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    placeholder="type to filter…"
                    class="w-full px-3 py-2 rounded-lg bg-white/10 border border-white/15 outline-none"
                />
                <div class="mt-2 flex flex-wrap gap-2">
                    {move || {
                        query
                            .with(|q| filter(BASIC_SKILLS, q))
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <span class="px-2 py-1 rounded-lg bg-white/10 border border-white/15 text-xs">
                                        {s}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
