//! Battle Statistics
//!
//! Pure derivation of the dashboard numbers from both collections.
//! Recomputed whenever either collection changes.

use std::cmp::Ordering;

use crate::models::{Participant, TodoItem};

/// Percentage of completed items, rounded half up. Zero for an empty list.
pub fn score(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor(100 * c / t + 1/2) in integers
    ((200 * completed + total) / (2 * total)) as u32
}

/// Strictly higher score wins; `None` is a tie.
pub fn winner(boy_score: u32, girl_score: u32) -> Option<Participant> {
    leader(boy_score, girl_score)
}

/// Strictly more pending items loses; `None` is a tie.
pub fn laggard(boy_pending: usize, girl_pending: usize) -> Option<Participant> {
    leader(boy_pending, girl_pending)
}

fn leader<T: Ord>(boy: T, girl: T) -> Option<Participant> {
    match boy.cmp(&girl) {
        Ordering::Greater => Some(Participant::Boy),
        Ordering::Less => Some(Participant::Girl),
        Ordering::Equal => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticipantStats {
    pub completed: usize,
    pub total: usize,
    pub pending: usize,
    pub score: u32,
}

impl ParticipantStats {
    pub fn from_items(items: &[TodoItem]) -> Self {
        let completed = items.iter().filter(|item| item.completed).count();
        let total = items.len();
        Self {
            completed,
            total,
            pending: total - completed,
            score: score(completed, total),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BattleStats {
    pub boy: ParticipantStats,
    pub girl: ParticipantStats,
    pub combined_completed: usize,
    pub winner: Option<Participant>,
    pub laggard: Option<Participant>,
    /// Share of the combined completed count, for the split bar
    pub boy_ratio: f64,
    pub girl_ratio: f64,
}

impl BattleStats {
    pub fn compute(boy_items: &[TodoItem], girl_items: &[TodoItem]) -> Self {
        let boy = ParticipantStats::from_items(boy_items);
        let girl = ParticipantStats::from_items(girl_items);
        let combined_completed = boy.completed + girl.completed;

        let (boy_ratio, girl_ratio) = if combined_completed > 0 {
            (
                boy.completed as f64 / combined_completed as f64,
                girl.completed as f64 / combined_completed as f64,
            )
        } else {
            (0.5, 0.5)
        };

        Self {
            winner: winner(boy.score, girl.score),
            laggard: laggard(boy.pending, girl.pending),
            boy,
            girl,
            combined_completed,
            boy_ratio,
            girl_ratio,
        }
    }

    pub fn of(&self, participant: Participant) -> &ParticipantStats {
        match participant {
            Participant::Boy => &self.boy,
            Participant::Girl => &self.girl,
        }
    }

    pub fn ratio(&self, participant: Participant) -> f64 {
        match participant {
            Participant::Boy => self.boy_ratio,
            Participant::Girl => self.girl_ratio,
        }
    }
}
