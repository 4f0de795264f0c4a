use leptos::prelude::*;

use crate::content::{Badge, Icon, ProjectEntry, Stat};

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! {
        <span class="inline-block w-5 text-center" aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}

#[component]
pub fn Card(title: &'static str, icon: Icon, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-3xl p-5 bg-white/10 backdrop-blur border border-white/10 shadow-xl">
            <div class="flex items-center gap-2 font-semibold">
                <IconGlyph icon />
                <h4>{title}</h4>
            </div>
            <div class="mt-3">{children()}</div>
        </div>
    }
}

#[component]
pub fn BadgeChip(badge: Badge) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2 px-3 py-2 rounded-xl bg-white/5 border border-white/10">
            <IconGlyph icon=badge.icon />
            {badge.label}
        </span>
    }
}

#[component]
pub fn StatTile(stat: Stat) -> impl IntoView {
    view! {
        <div class="rounded-2xl px-3 py-2 bg-white/5 border border-white/10">
            <div class="text-[10px] uppercase tracking-wide text-white/50">{stat.label}</div>
            <div class="font-semibold">{stat.value}</div>
        </div>
    }
}

#[component]
fn ExternalButton(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="text-xs px-2 py-1 rounded-lg border border-white/20 hover:bg-white/10"
        >
            {label}
        </a>
    }
}

#[component]
pub fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <div class="rounded-2xl p-4 bg-white/5 border border-white/10">
            <div class="flex items-center justify-between gap-2">
                <div class="font-semibold">{project.name}</div>
                <div class="flex items-center gap-2">
                    {project.demo_url.map(|href| view! { <ExternalButton href label="Live demo" /> })}
                    {project.source_url.map(|href| view! { <ExternalButton href label="View repo" /> })}
                </div>
            </div>
            <div class="text-xs text-white/60 mt-1">{project.stack_line()}</div>
            <p class="text-sm text-white/80 mt-2">{project.description}</p>
        </div>
    }
}

/// One dated entry with bullets. Experience and education share the shape.
#[component]
pub fn TimelineEntry(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    period: &'static str,
    bullets: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="rounded-2xl p-4 bg-white/5 border border-white/10">
            <div class="flex flex-wrap items-center gap-2">
                <div class="font-semibold">{title}</div>
                {subtitle.map(|s| view! { <span class="text-white/50">"• "{s}</span> })}
                <span class="ml-auto text-white/60 text-sm">{period}</span>
            </div>
            <BulletList items=bullets />
        </div>
    }
}

#[component]
pub fn BulletList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="mt-2 text-sm text-white/80 space-y-1 list-disc list-inside">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}
