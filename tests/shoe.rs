//! Card, shoe, hand and participant tests.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    Card, Console, DECK_SIZE, Decision, DrawError, GameOptions, Hand, Participant, Seat, Shoe,
    Status, Strategy, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

/// Answers every prompt with the same word.
struct Answer(&'static str);

impl Console for Answer {
    fn ask(&mut self, _participant: &Participant) -> String {
        self.0.to_string()
    }

    fn render(&mut self, _participant: &Participant) {}
}

#[test]
fn card_values_and_labels() {
    assert_eq!(card(Suit::Heart, 1).value(), 1);
    assert_eq!(card(Suit::Heart, 1).label(), "A");
    assert_eq!(card(Suit::Clover, 7).value(), 7);
    assert_eq!(card(Suit::Clover, 10).label(), "10");
    assert_eq!(card(Suit::Spade, 11).value(), 10);
    assert_eq!(card(Suit::Spade, 11).label(), "J");
    assert_eq!(card(Suit::Diamond, 13).value(), 10);
    assert_eq!(card(Suit::Diamond, 13).label(), "K");
    assert_eq!(card(Suit::Diamond, 12).to_string(), "(Diamond: Q)");
    assert_eq!(card(Suit::Clover, 2).to_string(), "(Clover: 2)");
}

#[test]
fn built_shoe_is_a_full_canonical_deck() {
    let shoe = Shoe::build();
    let cards = shoe.cards();

    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(cards.iter().collect::<BTreeSet<_>>().len(), DECK_SIZE);

    assert_eq!(cards[0], card(Suit::Diamond, 1));
    assert_eq!(cards[9], card(Suit::Diamond, 10));
    assert_eq!(cards[12], card(Suit::Diamond, 13));
    assert_eq!(cards[13], card(Suit::Heart, 1));
    assert_eq!(cards[26], card(Suit::Clover, 1));
    assert_eq!(cards[51], card(Suit::Spade, 13));
}

#[test]
fn built_shoe_point_value_counts() {
    let cards = Shoe::build().cards();

    for value in 1..=9 {
        let count = cards.iter().filter(|card| card.value() == value).count();
        assert_eq!(count, 4, "value {value}");
    }
    assert_eq!(cards.iter().filter(|card| card.value() == 10).count(), 16);
    assert_eq!(cards.iter().filter(|card| card.rank == 1).count(), 4);
}

#[test]
fn shuffle_is_a_permutation() {
    let canonical = Shoe::build().cards();

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::build();
        shoe.shuffle(&mut rng);

        assert_eq!(shoe.len(), DECK_SIZE);
        assert_eq!(sorted(shoe.cards()), sorted(canonical.clone()));
        assert_ne!(shoe.cards(), canonical, "seed {seed} left the deck in order");
    }
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut first = Shoe::build();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    let mut second = Shoe::build();
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(first, second);
}

#[test]
fn draw_takes_from_the_front_until_empty() {
    let mut shoe = Shoe::build();
    let mut seen = BTreeSet::new();

    assert_eq!(shoe.draw(), Ok(card(Suit::Diamond, 1)));
    seen.insert(card(Suit::Diamond, 1));

    for remaining in (0..DECK_SIZE - 1).rev() {
        let drawn = shoe.draw().unwrap();
        assert_eq!(shoe.len(), remaining);
        assert!(seen.insert(drawn), "{drawn} drawn twice");
        assert!(!shoe.cards().contains(&drawn));
    }

    assert!(shoe.is_empty());
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn empty_shoe_always_fails() {
    let mut shoe = Shoe::from_cards([card(Suit::Spade, 4)]);
    assert_eq!(shoe.draw(), Ok(card(Suit::Spade, 4)));

    for _ in 0..3 {
        assert_eq!(shoe.draw(), Err(DrawError::EmptyShoe));
        assert_eq!(shoe.len(), 0);
    }
}

#[test]
fn hand_sum_is_a_running_total() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.sum(), 0);

    let mut total = 0;
    for card in [
        card(Suit::Heart, 1),
        card(Suit::Clover, 13),
        card(Suit::Spade, 5),
        card(Suit::Diamond, 3),
    ] {
        hand.give(card);
        total += u16::from(card.value());
        assert_eq!(hand.sum(), total);
        assert_eq!(hand.sum(), hand.sum());
    }

    assert_eq!(hand.len(), 4);
    assert_eq!(hand.sum(), 19);
    assert!(!hand.is_busted());
}

#[test]
fn busted_iff_over_21() {
    let mut hand = Hand::new();
    hand.give(card(Suit::Heart, 10));
    hand.give(card(Suit::Spade, 11));
    hand.give(card(Suit::Clover, 1));
    assert_eq!(hand.sum(), 21);
    assert!(!hand.is_busted());

    hand.give(card(Suit::Diamond, 1));
    assert_eq!(hand.sum(), 22);
    assert!(hand.is_busted());
}

#[test]
fn participant_seats_and_labels() {
    let player = Participant::player(3);
    let dealer = Participant::dealer();

    assert_eq!(player.seat(), Seat::Player(3));
    assert_eq!(player.strategy(), Strategy::HumanPrompt);
    assert_eq!(player.to_string(), "Player3");
    assert!(!player.is_dealer());

    assert_eq!(dealer.seat(), Seat::Dealer);
    assert_eq!(dealer.strategy(), Strategy::DealerRule);
    assert_eq!(dealer.to_string(), "Dealer");
    assert!(dealer.is_dealer());
}

#[test]
fn staying_never_reverts() {
    let mut player = Participant::player(1);
    player.give(card(Suit::Heart, 10));
    player.give(card(Suit::Spade, 2));
    assert_eq!(player.update_status(), Status::Active);

    player.mark_staying();
    assert!(player.is_staying());
    assert_eq!(player.update_status(), Status::Staying);

    player.give(card(Suit::Clover, 13));
    assert_eq!(player.update_status(), Status::Busted);
    assert!(player.is_staying());
    assert!(player.is_done());
}

#[test]
fn human_stays_only_on_the_keyword() {
    let options = GameOptions::default();

    let mut player = Participant::player(1);
    assert_eq!(player.decide(&mut Answer("heat"), &options), Decision::Heat);
    assert_eq!(player.decide(&mut Answer("s"), &options), Decision::Heat);
    assert_eq!(player.decide(&mut Answer("Stay"), &options), Decision::Heat);
    assert!(!player.is_staying());

    assert_eq!(player.decide(&mut Answer("stay"), &options), Decision::Stay);
    assert!(player.is_staying());

    let options = GameOptions::default().with_stay_keyword("s");
    let mut player = Participant::player(2);
    assert_eq!(player.decide(&mut Answer("s"), &options), Decision::Stay);
    assert_eq!(player.status(), Status::Staying);
}

#[test]
fn dealer_rule_stays_above_17() {
    let options = GameOptions::default();
    let mut console = Answer("unused");

    let mut dealer = Participant::dealer();
    dealer.give(card(Suit::Heart, 10));
    dealer.give(card(Suit::Spade, 7));
    assert_eq!(dealer.sum(), 17);
    assert_eq!(dealer.decide(&mut console, &options), Decision::Heat);
    assert_eq!(dealer.decide(&mut console, &options), Decision::Heat);
    assert!(!dealer.is_staying());

    dealer.give(card(Suit::Clover, 1));
    assert_eq!(dealer.decide(&mut console, &options), Decision::Stay);
    assert_eq!(dealer.decide(&mut console, &options), Decision::Stay);
    assert_eq!(dealer.status(), Status::Staying);
}

#[test]
fn dealer_threshold_is_configurable() {
    let options = GameOptions::default().with_dealer_stays_above(15);
    let mut dealer = Participant::dealer();
    dealer.give(card(Suit::Heart, 10));
    dealer.give(card(Suit::Spade, 6));

    assert_eq!(dealer.decide(&mut Answer("unused"), &options), Decision::Stay);
}
