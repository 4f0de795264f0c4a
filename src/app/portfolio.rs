use std::time::Duration;

use leptos::prelude::*;

use super::background::AnimatedBackground;
use super::cards::{BulletList, Card, IconGlyph, ProjectCard, TimelineEntry};
use super::contact::ContactLines;
use super::orbit::Orbit;
use super::playground::Playground;
use crate::content::{
    Icon, ABOUT, EDUCATION, EXPERIENCE, FOCUS_POINTS, LANGUAGES, PROFILE, PROJECT_GROUPS, SKILLS,
};
use crate::scroll::Anchor;
use crate::view_state::ViewState;

// AnimatedShow puts these on its own wrapper div, which has to be the fixed
// layer: a transformed ancestor would pin a fixed child to itself.
const PANEL_SHOWN: &str =
    "fixed inset-0 z-30 overflow-y-auto bg-slate-950/80 backdrop-blur-xl panel-slide-in";
const PANEL_HIDDEN: &str =
    "fixed inset-0 z-30 overflow-y-auto bg-slate-950/80 backdrop-blur-xl panel-slide-out";

/// The slide-in panel holding the orbit menu and every CV section.
#[component]
pub fn PortfolioPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let open = Memo::new(move |_| state.with(|s| s.portfolio_open()));

    view! {
        <AnimatedShow
            when=open
            show_class=PANEL_SHOWN
            hide_class=PANEL_HIDDEN
            hide_delay=Duration::from_millis(400)
        >
            <div class="absolute inset-0 -z-10">
                <AnimatedBackground subtle=true />
            </div>
            <div class="max-w-6xl mx-auto px-6 py-6">
                <div class="flex items-center justify-between">
                    <h3 class="text-xl font-semibold tracking-tight">"Portfolio"</h3>
                    <button
                        on:click=move |_| state.update(ViewState::close_portfolio)
                        class="px-4 py-2 rounded-xl border border-white/15 text-white/80 hover:text-white hover:bg-white/10"
                    >
                        "Close"
                    </button>
                </div>

                <div class="relative mt-8 grid lg:grid-cols-2 gap-10 items-center">
                    <Orbit />
                    <div class="grid gap-6">
                        <AboutSection />
                        <SkillsSection />
                        <ProjectsSection />
                        <ExperienceSection />
                        <EducationSection />
                        <LanguagesAndContact />
                        <Card title="Playground & Test cases" icon=Icon::Flask>
                            <Playground />
                        </Card>
                    </div>
                </div>
            </div>
        </AnimatedShow>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <Card title="CV & About" icon=Icon::File>
            <div id=Anchor::Cv.id() class="grid sm:grid-cols-2 gap-4 scroll-mt-6">
                <div class="text-sm text-white/80">
                    <p>
                        <span class="font-semibold">"Name: "</span>
                        {PROFILE.name}
                    </p>
                    <p>
                        <span class="font-semibold">"Age: "</span>
                        {PROFILE.age}
                    </p>
                    <p>
                        <span class="font-semibold">"Location: "</span>
                        {PROFILE.location}
                    </p>
                    <p class="mt-2">{ABOUT}</p>
                </div>
                <div class="text-sm text-white/80">
                    <BulletList items=FOCUS_POINTS />
                </div>
            </div>
        </Card>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <Card title="Key Skills" icon=Icon::Wrench>
            <div class="grid sm:grid-cols-3 gap-4">
                {SKILLS
                    .iter()
                    .map(|cat| {
                        view! {
                            <div>
                                <div class="flex items-center gap-2 font-medium mb-2">
                                    <IconGlyph icon=cat.icon />
                                    <span>{cat.title}</span>
                                </div>
                                <BulletList items=cat.items />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <Card title="Projects" icon=Icon::Branch>
            <div id=Anchor::Projects.id() class="grid gap-8 scroll-mt-6">
                {PROJECT_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div>
                                <h5 class="text-sm font-semibold mb-3 text-white/80">
                                    {group.heading}
                                </h5>
                                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {group
                                        .projects
                                        .iter()
                                        .map(|project| view! { <ProjectCard project=*project /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <Card title="Experience" icon=Icon::Network>
            <div class="grid gap-4">
                {EXPERIENCE
                    .iter()
                    .map(|e| {
                        view! {
                            <TimelineEntry
                                title=e.role
                                subtitle=e.company
                                period=e.period
                                bullets=e.bullets
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn EducationSection() -> impl IntoView {
    view! {
        <Card title="Education" icon=Icon::File>
            <div class="grid gap-4">
                {EDUCATION
                    .iter()
                    .map(|ed| {
                        view! { <TimelineEntry title=ed.name period=ed.period bullets=ed.bullets /> }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn LanguagesAndContact() -> impl IntoView {
    view! {
        <div id=Anchor::Contact.id() class="grid sm:grid-cols-2 gap-6 scroll-mt-6">
            <Card title="Languages" icon=Icon::Languages>
                <ul class="text-sm text-white/80 space-y-1">
                    {LANGUAGES
                        .iter()
                        .map(|l| {
                            view! {
                                <li class="flex items-center justify-between">
                                    <span>{l.name}</span>
                                    <span class="text-white/60">{l.level}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Card>
            <Card title="Contact" icon=Icon::Mail>
                <div class="text-sm text-white/80 space-y-2">
                    <ContactLines />
                </div>
            </Card>
        </div>
    }
}
