use casino_engine::blackjack::BlackjackHand;
use casino_engine::cards::{Card, Rank as R, Suit as S};

fn hand(ranks: &[R]) -> BlackjackHand {
    BlackjackHand::new(ranks.iter().map(|&r| Card::new(r, S::Spades)).collect())
}

#[test]
fn hand_score_no_aces() {
    assert_eq!(hand(&[R::Queen, R::King]).score(), 20);
}

#[test]
fn hand_score_with_aces() {
    assert_eq!(hand(&[R::Ace, R::Ace, R::Seven, R::Two]).score(), 21);
}

#[test]
fn late_ace_sees_running_total() {
    // 9 + 11, then 1
    assert_eq!(hand(&[R::Seven, R::Two, R::Ace, R::Ace]).score(), 21);
    // 10 exactly still allows a soft ace
    assert_eq!(hand(&[R::King, R::Ace]).score(), 21);
    assert_eq!(hand(&[R::King, R::Five, R::Ace]).score(), 16);
}

#[test]
fn early_soft_ace_is_not_revalued() {
    // an ace counted as 11 stays 11 even when later cards bust the hand
    let h = hand(&[R::Ace, R::Nine, R::Five]);
    assert_eq!(h.score(), 25);
    assert!(h.is_bust());
}

#[test]
fn many_aces() {
    let h = hand(&[R::Ace; 4]);
    assert_eq!(h.score(), 14);
    assert!(!h.is_bust());
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(BlackjackHand::default().score(), 0);
}

#[test]
fn natural_blackjack_needs_two_cards() {
    assert!(hand(&[R::Ace, R::Jack]).is_blackjack());
    assert!(!hand(&[R::Seven, R::Seven, R::Seven]).is_blackjack());
}

#[test]
fn score_updates_after_push() {
    let mut h = hand(&[R::Ten, R::Six]);
    assert_eq!(h.score(), 16);
    h.push(Card::new(R::Eight, S::Hearts));
    assert_eq!(h.score(), 24);
    assert!(h.is_bust());
    assert_eq!(h.cards().len(), 3);
}
