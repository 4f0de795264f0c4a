use leptos::prelude::*;

use super::cards::IconGlyph;
use crate::content::{Icon, PROFILE};
use crate::navigation::{chip_transform, NavigationEntry, ORBIT_ENTRIES};
use crate::scroll::BrowserScroll;
use crate::view_state::{RingSpin, ViewState};

#[component]
pub fn Orbit() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let target = Memo::new(move |_| state.with(|s| s.rotation()));
    let spin = RwSignal::new(RingSpin::default());
    Effect::new(move |_| {
        let target_now = target.get();
        if let Some(next) = spin.try_update(|s| s.retarget(target_now)).flatten() {
            // two frames: the browser styles the ring at rest in the first
            request_animation_frame(move || {
                request_animation_frame(move || {
                    // the panel may have unmounted the ring by now
                    if let Some(target_now) = target.try_get_untracked() {
                        spin.try_update(|s| s.frame(next, target_now));
                    }
                })
            });
        }
    });
    let rotation = Memo::new(move |_| spin.with(RingSpin::shown));
    let total = ORBIT_ENTRIES.len();

    view! {
        <div class="relative w-full aspect-square max-w-[520px] mx-auto">
            <div class="absolute inset-0 rounded-full bg-gradient-to-br from-white/10 to-white/5 border border-white/10" />
            <div
                class="absolute inset-6 rounded-full orbit-rotor"
                style:transform=move || format!("rotate({}deg)", rotation.get())
            >
                {ORBIT_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! { <OrbitChip index total entry=*entry rotation /> }
                    })
                    .collect_view()}
            </div>
            <div class="absolute inset-1 grid place-content-center">
                <CenterCard />
            </div>
        </div>
    }
}

#[component]
fn OrbitChip(
    index: usize,
    total: usize,
    entry: NavigationEntry,
    rotation: Memo<f64>,
) -> impl IntoView {
    view! {
        <div
            class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 orbit-chip-slot"
            style:transform=move || chip_transform(index, total, rotation.get())
        >
            <div class="orbit-chip inline-flex items-center px-3 py-2 rounded-2xl bg-white/10 backdrop-blur border border-white/10 text-sm">
                <button
                    on:click=move |_| {
                        entry.activate(&BrowserScroll);
                    }
                    class="inline-flex items-center gap-2"
                    title=entry.label
                    aria-label=entry.label
                >
                    <IconGlyph icon=entry.icon />
                    <span class="ml-1 text-sm">{entry.label}</span>
                </button>
            </div>
        </div>
    }
}

#[component]
fn CenterCard() -> impl IntoView {
    view! {
        <div class="rounded-3xl p-6 text-center bg-white/10 backdrop-blur border border-white/10">
            <h4 class="text-lg font-semibold">{PROFILE.name}</h4>
            <p class="text-xs text-white/70">
                {format!("{} • {} years", PROFILE.title, PROFILE.age)}
            </p>
            <div class="mt-3 text-xs text-white/80 flex flex-col gap-1">
                <span class="inline-flex items-center gap-2 justify-center">
                    <IconGlyph icon=Icon::Mail />
                    {PROFILE.email}
                </span>
                <span class="inline-flex items-center gap-2 justify-center">
                    <IconGlyph icon=Icon::Phone />
                    {PROFILE.phone}
                </span>
                <span class="inline-flex items-center gap-2 justify-center">
                    <IconGlyph icon=Icon::Pin />
                    {PROFILE.location}
                </span>
            </div>
        </div>
    }
}
