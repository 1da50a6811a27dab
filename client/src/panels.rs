use leptos::prelude::*;

use pitboard_shared::{Alliance, ScheduledMatch};

use crate::app::{AllianceRoster, ClockSetting, MatchSchedule};
use crate::time_format::format_clock;

pub(crate) const UNNAMED_ALLIANCE: &str = "Unnamed Alliance";

/// Roster of announced alliances, in feed order.
#[component]
pub fn AlliancePanel() -> impl IntoView {
    let AllianceRoster(alliances) = expect_context();
    let is_empty = Memo::new(move |_| alliances.get().is_empty());

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=|| view! {
                <div style="padding: 12px 0; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #3a3f5c; letter-spacing: 0.05em;">
                    "No alliances announced yet"
                </div>
            }
        >
            <ul style="list-style: none; padding: 8px 0; margin: 0;">
                <For
                    each={move || alliances.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|item| (item.0, item.1.name.clone())
                    children=move |(_, alliance): (usize, Alliance)| {
                        let name = alliance.name_or(UNNAMED_ALLIANCE).to_string();
                        let teams = alliance.teams.join("  ");
                        view! {
                            <li style="display: flex; align-items: baseline; gap: 8px; padding: 4px 0;">
                                {alliance.seed.map(|seed| view! {
                                    <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; color: #5a5860; min-width: 20px;">
                                        {format!("#{seed}")}
                                    </span>
                                })}
                                <span style="font-family: 'Silkscreen', monospace; font-size: 0.78rem; color: #e2e0d8;">
                                    {name}
                                </span>
                                <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; color: #9a9590;">
                                    {teams}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

/// Upcoming matches with their leading alliance and predicted start.
#[component]
pub fn MatchPanel() -> impl IntoView {
    let MatchSchedule(schedule) = expect_context();
    let ClockSetting(clock) = expect_context();
    let is_empty = Memo::new(move |_| schedule.get().is_empty());

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=|| view! {
                <div style="padding: 12px 0; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #3a3f5c; letter-spacing: 0.05em;">
                    "No matches scheduled yet"
                </div>
            }
        >
            <ul style="list-style: none; padding: 8px 0; margin: 0;">
                <For
                    each=move || schedule.get()
                    key=|scheduled| scheduled.label.clone()
                    children=move |scheduled: ScheduledMatch| {
                        let headline = scheduled.headline(UNNAMED_ALLIANCE).to_string();
                        let label = scheduled.label.clone();
                        view! {
                            <li style="display: flex; align-items: baseline; gap: 8px; padding: 4px 0;">
                                <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #e2e0d8; min-width: 120px;">
                                    {label}
                                </span>
                                <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #9a9590; flex: 1;">
                                    {headline}
                                </span>
                                {scheduled.predicted_start.map(|at| view! {
                                    <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #5a5860; font-variant-numeric: tabular-nums;">
                                        {move || format_clock(&at.with_timezone(&chrono::Local), clock.get())}
                                    </span>
                                })}
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
