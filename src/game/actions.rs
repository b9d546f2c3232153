use log::debug;

use crate::card::{Card, CardId, Suit};
use crate::error::{ActionError, WildError};
use crate::snapshot::GameSnapshot;

use super::{Game, GameEvent, GameState, Side, Table};

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state {
            GameState::PlayerTurn => Ok(()),
            GameState::OpponentTurn => Err(ActionError::NotYourTurn),
            GameState::Dealing | GameState::PendingWild { .. } | GameState::GameOver { .. } => {
                Err(ActionError::InvalidState)
            }
        }
    }
}

impl Game {
    /// Player action: draw a card.
    ///
    /// If the drawn card can be played, the turn stays with the player so
    /// they may play it. Otherwise, or if the deck is empty, the turn passes
    /// to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the game is not
    /// being played (including while a wild card waits for its suit).
    pub fn player_draw(&self) -> Result<GameSnapshot, ActionError> {
        self.table.with(|table| {
            table.ensure_player_turn()?;

            if let Some(card) = table.draw_for(Side::Player) {
                table.record(GameEvent::DrewPlayable { card });
            }

            Ok(table.snapshot())
        })
    }

    /// Player action: play the card with id `card_id`.
    ///
    /// For an eight, `chosen_suit` names the new active suit. If it is
    /// `None`, the eight stays in the player's hand and the game waits for
    /// [`Game::resolve_wild`]. For any other card `chosen_suit` is ignored and
    /// the card's own suit becomes active.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the game is not being
    /// played, the id is unknown, the card is not in the player's hand, or
    /// the card does not match the active suit or the top card's rank.
    pub fn player_play(
        &self,
        card_id: CardId,
        chosen_suit: Option<Suit>,
    ) -> Result<GameSnapshot, ActionError> {
        let card = Card::from_id(card_id).ok_or(ActionError::UnknownCard(card_id))?;

        self.table.with(|table| {
            table.ensure_player_turn()?;

            if !table.player.contains(card) {
                return Err(ActionError::CardNotInHand(card));
            }
            if !table.is_legal(card) {
                return Err(ActionError::IllegalCard(card));
            }

            match (card.is_wild(), chosen_suit) {
                (true, Some(suit)) => table.complete_play(Side::Player, card, suit),
                (true, None) => {
                    debug!("player committed {card}, waiting for a suit");
                    table.state = GameState::PendingWild { card };
                    table.record(GameEvent::AwaitingSuit { card });
                }
                (false, _) => table.complete_play(Side::Player, card, card.suit),
            }

            Ok(table.snapshot())
        })
    }

    /// Names the suit for the eight the player committed, completing the
    /// play.
    ///
    /// # Errors
    ///
    /// Returns an error if no wild card is waiting for a suit.
    pub fn resolve_wild(&self, suit: Suit) -> Result<GameSnapshot, WildError> {
        self.table.with(|table| {
            let card = table.state.pending_wild().ok_or(WildError::NoPendingWild)?;
            table.complete_play(Side::Player, card, suit);
            Ok(table.snapshot())
        })
    }

    /// Takes back the eight the player committed. The card never left the
    /// hand, so this only returns the game to the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no wild card is waiting for a suit.
    pub fn cancel_wild(&self) -> Result<GameSnapshot, WildError> {
        self.table.with(|table| {
            let card = table.state.pending_wild().ok_or(WildError::NoPendingWild)?;
            debug!("player took back {card}");
            table.state = GameState::PlayerTurn;
            table.record(GameEvent::WildCancelled);
            Ok(table.snapshot())
        })
    }
}
