use leptos::prelude::*;

use pitboard_shared::{FeedDisplay, FeedState};

use crate::app::ClockSetting;
use crate::time_format::{ClockConvention, format_clock};

/// Banner text for a projected feed state, in the viewer's local timezone.
/// `None` means the banner renders nothing.
fn status_label(display: &FeedDisplay, convention: ClockConvention) -> Option<String> {
    match display {
        FeedDisplay::Failed { message } => Some(format!("Error: {message}")),
        FeedDisplay::Refreshing => Some("Updating...".to_string()),
        FeedDisplay::Fresh { at } => Some(format!(
            "Last updated: {}",
            format_clock(&at.with_timezone(&chrono::Local), convention)
        )),
        FeedDisplay::Empty => None,
    }
}

/// Freshness banner for one polled feed. One instance per feed; the feed
/// signal is the only thing that differs between domains.
#[component]
pub fn FeedStatus(#[prop(into)] feed: Signal<FeedState>) -> impl IntoView {
    let ClockSetting(clock) = expect_context();
    let display = Memo::new(move |_| FeedDisplay::from_state(&feed.get()));

    view! {
        {move || {
            let projected = display.get();
            let Some(label) = status_label(&projected, clock.get()) else {
                return ().into_any();
            };
            let (class, style) = match projected {
                FeedDisplay::Failed { .. } => (
                    "",
                    "font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #e05252; background: rgba(224,82,82,0.08); border: 1px solid rgba(224,82,82,0.35); border-radius: 4px; padding: 4px 8px; display: inline-block;",
                ),
                FeedDisplay::Refreshing => (
                    "status-pulse",
                    "font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #f5c542; background: rgba(245,197,66,0.08); border: 1px solid rgba(245,197,66,0.35); border-radius: 4px; padding: 4px 8px; display: inline-block; letter-spacing: 0.05em;",
                ),
                _ => (
                    "",
                    "font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #5a5860; padding: 4px 0; display: inline-block;",
                ),
            };
            view! { <div class=class style=style>{label}</div> }.into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::status_label;
    use crate::time_format::ClockConvention;
    use chrono::{TimeZone, Utc};
    use pitboard_shared::FeedDisplay;

    #[test]
    fn failed_label_carries_message_verbatim() {
        let display = FeedDisplay::Failed {
            message: "poll failed: 503".to_string(),
        };
        assert_eq!(
            status_label(&display, ClockConvention::TwentyFourHour),
            Some("Error: poll failed: 503".to_string())
        );
    }

    #[test]
    fn refreshing_label() {
        assert_eq!(
            status_label(&FeedDisplay::Refreshing, ClockConvention::TwentyFourHour),
            Some("Updating...".to_string())
        );
    }

    // Fresh labels render in the host's local timezone, so only the shape is
    // asserted here; exact clock output is covered in time_format.
    #[test]
    fn fresh_label_has_prefix_and_clock() {
        let display = FeedDisplay::Fresh {
            at: Utc.with_ymd_and_hms(2026, 3, 14, 14, 5, 0).unwrap(),
        };
        let label = status_label(&display, ClockConvention::TwentyFourHour).unwrap();
        let clock = label.strip_prefix("Last updated: ").unwrap();
        assert!(clock.contains(':'), "clock token missing: {label}");
        assert_eq!(
            Some(label.clone()),
            status_label(&display, ClockConvention::TwentyFourHour)
        );
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(
            status_label(&FeedDisplay::Empty, ClockConvention::TwelveHour),
            None
        );
    }
}
