use leptos::prelude::*;

use super::cards::IconGlyph;
use crate::content::{Icon, PROFILE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="relative z-10 max-w-6xl mx-auto px-6 py-6 flex items-center justify-between">
            <div class="flex items-center gap-3">
                <div class="w-9 h-9 rounded-xl bg-white/10 backdrop-blur-sm grid place-content-center">
                    <IconGlyph icon=Icon::Code />
                </div>
                <div>
                    <h1 class="text-lg font-semibold tracking-tight">{PROFILE.name}</h1>
                    <p class="text-xs text-white/70 -mt-0.5">{PROFILE.tagline}</p>
                </div>
            </div>
            <nav class="flex items-center gap-4 text-sm">
                <a
                    href=PROFILE.mailto()
                    class="inline-flex items-center gap-2 text-white/80 hover:text-white transition"
                >
                    <IconGlyph icon=Icon::Mail />
                    {PROFILE.email}
                </a>
                <a
                    href=PROFILE.tel()
                    class="hidden sm:inline-flex items-center gap-2 text-white/80 hover:text-white transition"
                >
                    <IconGlyph icon=Icon::Phone />
                    {PROFILE.phone}
                </a>
                <a
                    href=PROFILE.linkedin_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hidden md:inline-flex items-center gap-2 text-white/80 hover:text-white transition"
                >
                    <IconGlyph icon=Icon::LinkedIn />
                    "LinkedIn"
                </a>
            </nav>
        </header>
    }
}
