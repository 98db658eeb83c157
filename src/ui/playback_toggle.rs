//! Play/pause button over the video preview

use leptos::prelude::*;

use crate::core::PlaybackState;
use crate::ui::icon::{Icon, IconKind};

fn icon_for(state: PlaybackState) -> IconKind {
    match state {
        PlaybackState::Paused => IconKind::Play,
        PlaybackState::Playing => IconKind::Pause,
    }
}

fn toggle_playback(state: RwSignal<PlaybackState>) {
    state.update(PlaybackState::toggle);
}

/// Cosmetic playback toggle; swaps its icon and label, controls no media
#[component]
pub fn PlaybackToggle() -> impl IntoView {
    let state = RwSignal::new(PlaybackState::default());
    view! { <PlaybackButton state=state /> }
}

#[component]
fn PlaybackButton(state: RwSignal<PlaybackState>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="landing-press-lg bg-blue-600 text-white rounded-full p-4 shadow-lg"
            on:click=move |_| toggle_playback(state)
            aria-label=move || state.get().action_label()
        >
            {move || view! { <Icon kind=icon_for(state.get()) class="w-6 h-6" /> }}
        </button>
    }
}
