/// Card stack rotation: builds a deck from a photo catalog and cycles cards to the back.
///
/// Every operation takes the current deck by reference and returns a new one, so the
/// caller can swap snapshots without partially updated state.
use rand::RngExt;

use crate::types::{Card, CardId, LoadState, PhotoSource};

/// Lower bound of the random magnitude applied to the rotation factor.
const MIN_TILT: f64 = 0.5;

fn tilt<R: RngExt + ?Sized>(sign: f64, rotation_factor: f64, rng: &mut R) -> f64 {
    sign * rotation_factor * rng.random_range(MIN_TILT..=1.0)
}

/// Build a fresh deck in catalog order. Even positions tilt right, odd positions left.
pub fn initialize<R: RngExt + ?Sized>(
    photos: &[PhotoSource],
    rotation_factor: f64,
    rng: &mut R,
) -> Vec<Card> {
    photos
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
            Card {
                id: photo.id,
                image_path: photo.image_path.clone(),
                alt: photo.alt.clone(),
                rotation: tilt(sign, rotation_factor, rng),
                load_state: LoadState::Pending,
            }
        })
        .collect()
}

/// Cards that have not failed to load, in deck order.
pub fn visible(cards: &[Card]) -> Vec<&Card> {
    cards
        .iter()
        .filter(|card| card.load_state != LoadState::Failed)
        .collect()
}

/// Send the card at `visible_index` to the back of the deck with a new random tilt.
///
/// The index addresses the visible cards; it is mapped back to the full deck so failed
/// cards keep their slots. An index past the visible cards leaves the deck unchanged.
pub fn move_to_end<R: RngExt + ?Sized>(
    cards: &[Card],
    visible_index: usize,
    rotation_factor: f64,
    rng: &mut R,
) -> Vec<Card> {
    let mut deck = cards.to_vec();
    let Some(backing_index) = backing_index(cards, visible_index) else {
        return deck;
    };

    let mut card = deck.remove(backing_index);
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    card.rotation = tilt(sign, rotation_factor, rng);
    deck.push(card);
    deck
}

/// Pending -> Loaded. Failed cards stay failed.
pub fn mark_loaded(cards: &[Card], card_id: CardId) -> Vec<Card> {
    cards
        .iter()
        .map(|card| {
            if card.id == card_id && card.load_state == LoadState::Pending {
                Card {
                    load_state: LoadState::Loaded,
                    ..card.clone()
                }
            } else {
                card.clone()
            }
        })
        .collect()
}

pub fn mark_failed(cards: &[Card], card_id: CardId) -> Vec<Card> {
    cards
        .iter()
        .map(|card| {
            if card.id == card_id {
                Card {
                    load_state: LoadState::Failed,
                    ..card.clone()
                }
            } else {
                card.clone()
            }
        })
        .collect()
}

fn backing_index(cards: &[Card], visible_index: usize) -> Option<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.load_state != LoadState::Failed)
        .nth(visible_index)
        .map(|(index, _)| index)
}

/// Where a visible card sits in the rendered stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackPlacement {
    pub z_index: usize,
    pub offset: u16,
    pub rotation: f64,
}

/// Front-most card is index 0 with the highest z-index; each step back is shifted by `card_offset`.
pub fn stack_layout(visible_cards: &[&Card], card_offset: u16) -> Vec<StackPlacement> {
    let len = visible_cards.len();
    visible_cards
        .iter()
        .enumerate()
        .map(|(index, card)| StackPlacement {
            z_index: len - index,
            offset: card_offset.saturating_mul(index as u16),
            rotation: card.rotation,
        })
        .collect()
}
