mod background;
mod cards;
mod contact;
mod footer;
mod header;
mod hero;
mod orbit;
mod playground;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::PROFILE;
use crate::scroll::{scroll_to, Anchor, BrowserScroll};
use crate::view_state::{DeferredScroll, PortfolioReaction, ViewState, SCROLL_DELAY};

use background::AnimatedBackground;
use contact::ContactModal;
use footer::Footer;
use header::Header;
use hero::Hero;
use portfolio::PortfolioPanel;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950">
                <App />
            </body>
        </html>
    }
}

/// Scroll timer backed by `use_timeout_fn`, which also clears itself when
/// the owning scope is disposed.
struct TimeoutScroll<Start, Stop> {
    start: Start,
    stop: Stop,
}

impl<Start, Stop> DeferredScroll for TimeoutScroll<Start, Stop>
where
    Start: Fn(Anchor),
    Stop: Fn(),
{
    fn schedule(&mut self, anchor: Anchor) {
        (self.start)(anchor);
    }

    fn cancel(&mut self) {
        (self.stop)();
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = RwSignal::new(ViewState::default());
    provide_context(state);

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        |anchor: Anchor| {
            scroll_to(&BrowserScroll, anchor);
        },
        SCROLL_DELAY.as_millis() as f64,
    );
    let mut reaction = PortfolioReaction::new(TimeoutScroll { start, stop });
    let portfolio_open = Memo::new(move |_| state.with(|s| s.portfolio_open()));
    Effect::watch(
        move || portfolio_open.get(),
        move |_, _, _| state.update(|s| reaction.react(s)),
        false,
    );

    view! {
        <Title text=PROFILE.name />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="relative min-h-screen text-white overflow-hidden bg-slate-950">
            <AnimatedBackground />
            <Header />
            <Hero />
            <ContactModal />
            <PortfolioPanel />
            <Footer />
        </div>
    }
}
