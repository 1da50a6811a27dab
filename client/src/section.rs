use leptos::prelude::*;

/// Heading above a data section.
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: baseline; gap: 8px; padding-bottom: 6px; border-bottom: 1px solid #282c3e;">
            <span style="font-family: 'Silkscreen', monospace; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.14em; color: #f5c542;">
                {title}
            </span>
            {subtitle.map(|subtitle| view! {
                <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #5a5860;">
                    {subtitle}
                </span>
            })}
        </div>
    }
}
