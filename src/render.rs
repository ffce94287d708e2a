//! Read-only text rendering of a state.

use crate::player::PlayerId;
use crate::state::State;

/// Render a state as human-readable display lines.
///
/// One table line, one line per player in seat order, and a deck
/// count. Pure formatting: no I/O, no color.
#[must_use]
pub fn render(state: &State) -> Vec<String> {
    let mut lines = Vec::with_capacity(state.player_count() + 2);

    let table: Vec<String> = state.table().iter().map(ToString::to_string).collect();
    lines.push(format!("Table: {}", table.join(" ")));

    for player in state.players() {
        let hand: Vec<String> = state.hand(player.id).iter().map(ToString::to_string).collect();
        let marker = if player.id == state.current_player() {
            "*"
        } else {
            " "
        };
        lines.push(format!("{marker}{:<8} {}", player.name, hand.join("  ")));
    }

    lines.push(format!("Deck: {} cards", state.deck().len()));
    lines
}

/// Render one player's capture pile.
#[must_use]
pub fn render_captures(state: &State, player: PlayerId) -> String {
    let pile: Vec<String> = state.captures(player).iter().map(ToString::to_string).collect();
    format!("{}: {}", state.player(player).name, pile.join(" "))
}
