//! Session result types.

use serde::Serialize;

use crate::player::Player;

/// One player's final position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// Seat index in the roster.
    pub player: usize,
    /// Display name.
    pub name: String,
    /// Cumulative score across all rounds.
    pub score: u32,
}

/// The outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    /// Standings sorted by ascending score; lowest wins. Ties keep seat
    /// order.
    pub standings: Vec<Standing>,
    /// Seat indices of every player tied on the minimum score.
    pub winners: Vec<usize>,
}

impl SessionResult {
    pub(crate) fn from_players(players: &[Player]) -> Self {
        let mut standings: Vec<Standing> = players
            .iter()
            .enumerate()
            .map(|(player, p)| Standing {
                player,
                name: p.name().to_owned(),
                score: p.score(),
            })
            .collect();
        standings.sort_by_key(|standing| standing.score);
        let winners = standings.first().map_or_else(Vec::new, |best| {
            standings
                .iter()
                .take_while(|standing| standing.score == best.score)
                .map(|standing| standing.player)
                .collect()
        });
        Self { standings, winners }
    }
}
