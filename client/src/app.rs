use leptos::prelude::*;

use gloo_storage::Storage;

use pitboard_shared::{Alliance, FeedState, ScheduledMatch};

use crate::panels::{AlliancePanel, MatchPanel};
use crate::section::SectionHeader;
use crate::status::FeedStatus;
use crate::time_format::ClockConvention;

/// Newtype wrappers to give each feed a distinct type for Leptos context.
/// (Both are `RwSignal<FeedState>` — without wrappers, `provide_context`
/// overwrites one with the other.)
#[derive(Clone, Copy)]
pub(crate) struct AlliancesFeed(pub RwSignal<FeedState>);
#[derive(Clone, Copy)]
pub(crate) struct MatchesFeed(pub RwSignal<FeedState>);
#[derive(Clone, Copy)]
pub(crate) struct AllianceRoster(pub RwSignal<Vec<Alliance>>);
#[derive(Clone, Copy)]
pub(crate) struct MatchSchedule(pub RwSignal<Vec<ScheduledMatch>>);
#[derive(Clone, Copy)]
pub(crate) struct ClockSetting(pub RwSignal<ClockConvention>);

#[derive(serde::Serialize, serde::Deserialize, Default)]
#[serde(default)]
struct Settings {
    clock_override: Option<ClockConvention>,
}

/// Clock convention implied by the browser locale. Falls back to 24-hour
/// when no window/navigator is available.
fn environment_clock() -> ClockConvention {
    let Some(window) = web_sys::window() else {
        return ClockConvention::TwentyFourHour;
    };
    match window.navigator().language() {
        Some(tag) => ClockConvention::from_language_tag(&tag),
        None => ClockConvention::TwentyFourHour,
    }
}

/// Root application component. Owns the feed and roster signals; the pollers
/// that write them live outside this crate and reach them via context.
#[component]
pub fn App() -> impl IntoView {
    let alliances_feed: RwSignal<FeedState> = RwSignal::new(FeedState::default());
    let matches_feed: RwSignal<FeedState> = RwSignal::new(FeedState::default());
    let alliances: RwSignal<Vec<Alliance>> = RwSignal::new(Vec::new());
    let schedule: RwSignal<Vec<ScheduledMatch>> = RwSignal::new(Vec::new());

    let saved: Settings = gloo_storage::LocalStorage::get("pitboard_settings").unwrap_or_default();
    let clock_override: RwSignal<Option<ClockConvention>> = RwSignal::new(saved.clock_override);
    let clock: RwSignal<ClockConvention> =
        RwSignal::new(saved.clock_override.unwrap_or_else(environment_clock));

    provide_context(AlliancesFeed(alliances_feed));
    provide_context(MatchesFeed(matches_feed));
    provide_context(AllianceRoster(alliances));
    provide_context(MatchSchedule(schedule));
    provide_context(ClockSetting(clock));

    // Persist the clock override on any change
    Effect::new(move || {
        let settings = Settings {
            clock_override: clock_override.get(),
        };
        let _ = gloo_storage::LocalStorage::set("pitboard_settings", &settings);
    });

    view! {
        <div style="min-height: 100vh; background: #0c0e17; color: #e2e0d8; padding: 24px; display: flex; flex-direction: column; gap: 24px; max-width: 720px; margin: 0 auto;">
            <header style="display: flex; align-items: center; justify-content: space-between; gap: 8px;">
                <div style="font-family: 'Silkscreen', monospace; font-size: 1.25rem; font-weight: 700; letter-spacing: 0.18em; text-transform: uppercase; color: #f5c542; text-shadow: 0 0 16px rgba(245,197,66,0.08);">
                    "PITBOARD"
                </div>
                <ClockToggle clock=clock clock_override=clock_override />
            </header>
            <AllianceSection />
            <MatchSection />
        </div>
    }
}

/// Alliances region: header, roster, freshness banner for the alliances feed.
#[component]
fn AllianceSection() -> impl IntoView {
    let AlliancesFeed(feed) = expect_context();

    view! {
        <section style="display: flex; flex-direction: column; gap: 4px;">
            <SectionHeader title="Alliances" />
            <AlliancePanel />
            <FeedStatus feed=feed />
        </section>
    }
}

/// Matches region: identical shape to the alliances region, read from the
/// matches feed instead.
#[component]
fn MatchSection() -> impl IntoView {
    let MatchesFeed(feed) = expect_context();

    view! {
        <section style="display: flex; flex-direction: column; gap: 4px;">
            <SectionHeader title="Matches" subtitle="predicted start times".to_string() />
            <MatchPanel />
            <FeedStatus feed=feed />
        </section>
    }
}

/// Pill button flipping between 12-hour and 24-hour clock labels.
#[component]
fn ClockToggle(
    clock: RwSignal<ClockConvention>,
    clock_override: RwSignal<Option<ClockConvention>>,
) -> impl IntoView {
    view! {
        <button
            style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 999px; padding: 5px 10px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: border-color 0.15s, color 0.15s; font-family: 'JetBrains Mono', monospace; font-size: 0.66rem; color: #5a5860; min-width: 44px;"
            title="Switch clock convention"
            on:click=move |_| {
                let next = match clock.get_untracked() {
                    ClockConvention::TwelveHour => ClockConvention::TwentyFourHour,
                    ClockConvention::TwentyFourHour => ClockConvention::TwelveHour,
                };
                clock.set(next);
                clock_override.set(Some(next));
            }
        >
            {move || match clock.get() {
                ClockConvention::TwelveHour => "12h",
                ClockConvention::TwentyFourHour => "24h",
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::time_format::ClockConvention;

    #[test]
    fn settings_tolerate_missing_fields() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.clock_override, None);
    }

    #[test]
    fn settings_round_trip_override() {
        let settings = Settings {
            clock_override: Some(ClockConvention::TwelveHour),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.clock_override, Some(ClockConvention::TwelveHour));
    }
}
