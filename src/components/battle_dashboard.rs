//! Battle Dashboard Component
//!
//! Score comparison between the two lists: split bar, winner banner,
//! stat cards and per-person progress.
//!
//! Bars start from their neutral width and move to the real value shortly
//! after mount so the CSS transitions play.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Participant;
use crate::stats::BattleStats;
use crate::store::use_todo_store;

/// Delay before bars move to their real width
const REVEAL_DELAY_MS: u32 = 300;

pub fn winner_label(winner: Option<Participant>) -> &'static str {
    winner.map(|p| p.display_name()).unwrap_or("무승부")
}

pub fn laggard_label(laggard: Option<Participant>) -> &'static str {
    laggard.map(|p| p.display_name()).unwrap_or("둘 다 착해요")
}

/// Width of one side of the split bar, in percent
fn split_width(stats: &BattleStats, participant: Participant, revealed: bool) -> f64 {
    if revealed {
        stats.ratio(participant) * 100.0
    } else {
        50.0
    }
}

#[component]
fn StatCard(
    emoji: &'static str,
    label: String,
    #[prop(into)] value: Signal<String>,
    /// Stagger of the entrance animation, in seconds
    delay: f64,
) -> impl IntoView {
    view! {
        <div class="stat-card rise-in" style=format!("animation-delay: {}s;", delay)>
            <span class="stat-emoji">{emoji}</span>
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn BattleDashboard() -> impl IntoView {
    let store = use_todo_store();
    let stats = Memo::new(move |_| {
        BattleStats::compute(&store.todos(Participant::Boy), &store.todos(Participant::Girl))
    });

    let (revealed, set_revealed) = signal(false);
    spawn_local(async move {
        TimeoutFuture::new(REVEAL_DELAY_MS).await;
        set_revealed.set(true);
    });

    let split_segment = move |participant: Participant| {
        view! {
            <div
                class=format!("battle-segment {}", participant.as_str())
                style=move || format!("width: {}%;", split_width(&stats.get(), participant, revealed.get()))
            >
                {move || {
                    let completed = stats.get().of(participant).completed;
                    (completed > 0).then(|| completed.to_string())
                }}
            </div>
        }
    };

    let progress_row = move |participant: Participant| {
        view! {
            <div class="progress-row">
                <div class="progress-row-header">
                    <span class=format!("progress-name {}", participant.as_str())>{participant.display_name()}</span>
                    <span class="muted">{move || format!("{}%", stats.get().of(participant).score)}</span>
                </div>
                <div class=format!("progress-track {}", participant.as_str())>
                    <div
                        class="progress-fill"
                        style=move || {
                            let width = if revealed.get() { stats.get().of(participant).score } else { 0 };
                            format!("width: {}%;", width)
                        }
                    ></div>
                </div>
            </div>
        }
    };

    view! {
        <section class="battle-dashboard fade-in">
            <div class="battle-heading">
                <h1 class="battle-title">"오늘의 배틀"</h1>
                <p class="list-subtitle">"누가 더 열심히 했을까?"</p>
            </div>

            // VS battle bar
            <div class="card battle-card pop-in">
                <div class="battle-scores">
                    <div class="battle-score boy">
                        <span class="score-name">{Participant::Boy.display_name()}</span>
                        <span class="score-value">{move || stats.get().boy.score}</span>
                    </div>
                    <span class="versus">"VS"</span>
                    <div class="battle-score girl">
                        <span class="score-name">{Participant::Girl.display_name()}</span>
                        <span class="score-value">{move || stats.get().girl.score}</span>
                    </div>
                </div>

                <div class="battle-bar">
                    {split_segment(Participant::Boy)}
                    {split_segment(Participant::Girl)}
                </div>

                <div class="battle-legend">
                    <span>{move || format!("{}/{} 완료", stats.get().boy.completed, stats.get().boy.total)}</span>
                    <span>{move || format!("{}/{} 완료", stats.get().girl.completed, stats.get().girl.total)}</span>
                </div>
            </div>

            // Winner banner
            <div class="card winner-banner rise-in">
                <span class="trophy">"🏆"</span>
                <div>
                    <p class="muted">"오늘의 승자"</p>
                    <p class="winner-name">{move || winner_label(stats.get().winner)}</p>
                </div>
            </div>

            // Stats grid
            <div class="stat-grid">
                <StatCard
                    emoji="⚡️"
                    label=format!("{} 점수", Participant::Boy.display_name())
                    value=Signal::derive(move || format!("{}점", stats.get().boy.score))
                    delay=0.5
                />
                <StatCard
                    emoji="⚡️"
                    label=format!("{} 점수", Participant::Girl.display_name())
                    value=Signal::derive(move || format!("{}점", stats.get().girl.score))
                    delay=0.55
                />
                <StatCard
                    emoji="🔥"
                    label="총 완료".to_string()
                    value=Signal::derive(move || format!("{}개", stats.get().combined_completed))
                    delay=0.6
                />
                <StatCard
                    emoji="💤"
                    label="게으른 새".to_string()
                    value=Signal::derive(move || laggard_label(stats.get().laggard).to_string())
                    delay=0.65
                />
            </div>

            // Individual progress
            <div class="card progress-card rise-in">
                <h3 class="card-title">"진행 상황"</h3>
                {progress_row(Participant::Boy)}
                {progress_row(Participant::Girl)}
            </div>
        </section>
    }
}
