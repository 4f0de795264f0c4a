use std::time::Duration;

use leptos::prelude::*;

use super::cards::IconGlyph;
use crate::content::{Icon, PROFILE};
use crate::view_state::{ClickTarget, ViewState};

/// Mail, phone, location and LinkedIn rows, shared by the modal and the
/// contact card in the portfolio panel.
#[component]
pub fn ContactLines() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <IconGlyph icon=Icon::Mail />
            <a href=PROFILE.mailto() class="underline">
                {PROFILE.email}
            </a>
        </div>
        <div class="flex items-center gap-2">
            <IconGlyph icon=Icon::Phone />
            <a href=PROFILE.tel() class="underline">
                {PROFILE.phone}
            </a>
        </div>
        <div class="flex items-center gap-2">
            <IconGlyph icon=Icon::Pin />
            {PROFILE.location}
        </div>
        <div class="flex items-center gap-2">
            <IconGlyph icon=Icon::LinkedIn />
            <a href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer" class="underline">
                "LinkedIn"
            </a>
        </div>
    }
}

// Same layering as the portfolio panel: the AnimatedShow wrapper is the
// fixed backdrop, so its opacity animation cannot sink it under the page.
const MODAL_SHOWN: &str = "fixed inset-0 z-50 bg-slate-950/80 backdrop-blur overlay-fade-in";
const MODAL_HIDDEN: &str = "fixed inset-0 z-50 bg-slate-950/80 backdrop-blur overlay-fade-out";

#[component]
pub fn ContactModal() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let open = Memo::new(move |_| state.with(|s| s.contact_open()));

    view! {
        <AnimatedShow
            when=open
            show_class=MODAL_SHOWN
            hide_class=MODAL_HIDDEN
            hide_delay=Duration::from_millis(200)
        >
            <div
                class="h-full flex items-center justify-center p-4"
                on:click=move |_| state.update(|s| s.contact_clicked(ClickTarget::Backdrop))
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    class="max-w-md w-full rounded-3xl bg-white/10 border border-white/20 p-6 shadow-xl dialog-pop"
                    on:click=move |ev| {
                        // keep the backdrop handler from seeing this click
                        ev.stop_propagation();
                        state.update(|s| s.contact_clicked(ClickTarget::Content));
                    }
                >
                    <h3 class="text-lg font-semibold mb-4">"Contact Me"</h3>
                    <div class="space-y-3 text-sm text-white/80">
                        <ContactLines />
                    </div>
                    <div class="mt-6 text-right">
                        <button
                            on:click=move |_| state.update(ViewState::close_contact)
                            class="px-4 py-2 rounded-xl border border-white/15 text-white/80 hover:text-white hover:bg-white/10"
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </AnimatedShow>
    }
}
