//! Game integration tests.

use warrs::{
    Card, DECK_SIZE, DealError, Deck, Game, GameError, GameOptions, GameOutcome, GameState,
    PlayError, ROUNDS, Rank, ResultError, RoundOutcome, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A full deck that deals `front` first, then the remaining cards in
/// standard order.
fn deck_with_front(front: &[Card]) -> Deck {
    let mut cards = front.to_vec();
    cards.extend(
        Deck::standard()
            .cards()
            .copied()
            .filter(|c| !front.contains(c)),
    );
    Deck::from_cards(cards)
}

fn named_options() -> GameOptions {
    GameOptions::default().with_player_names("A", "B")
}

#[test]
fn deal_splits_deck_evenly() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), DECK_SIZE);

    game.deal().unwrap();

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.cards_remaining(), 0);
    for player in game.players() {
        assert_eq!(player.hand_len(), 26);
        assert_eq!(player.points(), 0);
    }
}

#[test]
fn deal_alternates_between_players() {
    let mut game = Game::with_deck(GameOptions::default(), Deck::standard());
    game.deal().unwrap();

    let one = game.player(0).unwrap();
    let two = game.player(1).unwrap();

    // Most recently received first.
    assert_eq!(one.hand().next(), Some(&card(Suit::Spades, Rank::King)));
    assert_eq!(one.hand().last(), Some(&card(Suit::Hearts, Rank::Two)));
    assert_eq!(two.hand().next(), Some(&card(Suit::Spades, Rank::Ace)));
    assert_eq!(two.hand().last(), Some(&card(Suit::Hearts, Rank::Three)));
}

#[test]
fn deal_errors() {
    let short: Vec<Card> = Deck::standard().cards().copied().take(DECK_SIZE - 1).collect();
    let mut game = Game::with_deck(GameOptions::default(), Deck::from_cards(short));

    assert_eq!(game.deal().unwrap_err(), DealError::EmptyDeck);
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
    for player in game.players() {
        assert_eq!(player.hand_len(), 0);
    }

    let mut game = Game::new(GameOptions::default(), 3);
    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn deal_rejects_extra_cards() {
    let mut cards: Vec<Card> = Deck::standard().cards().copied().collect();
    cards.push(card(Suit::Hearts, Rank::Ace));
    let mut game = Game::with_deck(GameOptions::default(), Deck::from_cards(cards));

    assert_eq!(game.deal().unwrap_err(), DealError::ExtraCards);
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), DECK_SIZE + 1);
    assert_eq!(
        game.play().unwrap_err(),
        GameError::Deal(DealError::ExtraCards)
    );
}

#[test]
fn deal_rejects_duplicate_card() {
    let mut cards: Vec<Card> = Deck::standard().cards().copied().collect();
    cards[51] = card(Suit::Hearts, Rank::King);
    let mut game = Game::with_deck(GameOptions::default(), Deck::from_cards(cards));

    assert_eq!(
        game.deal().unwrap_err(),
        DealError::DuplicateCard(card(Suit::Hearts, Rank::King))
    );
    assert_eq!(game.state(), GameState::Dealing);
    for player in game.players() {
        assert_eq!(player.hand_len(), 0);
    }

    let same = vec![card(Suit::Clubs, Rank::Two); DECK_SIZE];
    let mut game = Game::with_deck(GameOptions::default(), Deck::from_cards(same));
    assert_eq!(
        game.deal().unwrap_err(),
        DealError::DuplicateCard(card(Suit::Clubs, Rank::Two))
    );
}

#[test]
fn round_and_result_require_correct_state() {
    let mut game = Game::new(GameOptions::default(), 5);

    assert_eq!(game.play_round().unwrap_err(), PlayError::InvalidState);
    assert_eq!(game.result().unwrap_err(), ResultError::InvalidState);

    game.deal().unwrap();
    game.play_round().unwrap();
    assert_eq!(game.result().unwrap_err(), ResultError::InvalidState);

    game.play().unwrap();
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.play_round().unwrap_err(), PlayError::InvalidState);
}

#[test]
fn higher_card_wins_round() {
    let deck = deck_with_front(&[card(Suit::Hearts, Rank::King), card(Suit::Spades, Rank::Nine)]);
    let mut game = Game::with_deck(named_options(), deck);
    game.deal().unwrap();

    let round = game.play_round().unwrap();

    assert_eq!(round.round, 1);
    assert_eq!(
        round.cards,
        [card(Suit::Hearts, Rank::King), card(Suit::Spades, Rank::Nine)]
    );
    assert_eq!(
        round.outcome,
        RoundOutcome::Win {
            player: 0,
            name: "A".into(),
        }
    );
    assert_eq!(round.to_string(), "Round 1:\nA wins this round!");
    assert_eq!(game.player(0).unwrap().points(), 1);
    assert_eq!(game.player(1).unwrap().points(), 0);
    assert_eq!(game.player(0).unwrap().hand_len(), 25);
}

#[test]
fn equal_ranks_tie_without_points() {
    let deck = deck_with_front(&[card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Ten)]);
    let mut game = Game::with_deck(named_options(), deck);
    game.deal().unwrap();

    let round = game.play_round().unwrap();

    assert_eq!(round.outcome, RoundOutcome::Tie);
    assert_eq!(round.to_string(), "Round 1:\nIt's a tie!");
    assert_eq!(game.ties(), 1);
    assert_eq!(game.player(0).unwrap().points(), 0);
    assert_eq!(game.player(1).unwrap().points(), 0);
}

#[test]
fn unshuffled_game_has_known_winner() {
    // Rounds pair consecutive cards of the standard order. The second
    // player wins every pair except Ace of Hearts vs 2 of Diamonds and
    // Ace of Clubs vs 2 of Spades.
    let mut game = Game::with_deck(GameOptions::default(), Deck::standard());
    let result = game.play().unwrap();

    assert_eq!(result.points, [2, 24]);
    assert_eq!(result.ties, 0);
    assert_eq!(result.rounds.len(), usize::from(ROUNDS));
    assert_eq!(
        result.outcome,
        GameOutcome::Winner {
            player: 1,
            name: "Player 2".into(),
            points: 24,
        }
    );
    assert_eq!(
        result.outcome.to_string(),
        "Game over! Player 2 wins with 24 points!"
    );
    assert_eq!(
        result.rounds[6].outcome,
        RoundOutcome::Win {
            player: 0,
            name: "Player 1".into(),
        }
    );
}

#[test]
fn equal_points_is_reported_as_tie() {
    // Pair Hearts with Diamonds and Clubs with Spades so every round ties.
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for (first, second) in [(Suit::Hearts, Suit::Diamonds), (Suit::Clubs, Suit::Spades)] {
        for rank in Rank::ALL {
            cards.push(card(first, rank));
            cards.push(card(second, rank));
        }
    }

    let mut game = Game::with_deck(GameOptions::default(), Deck::from_cards(cards));
    let result = game.play().unwrap();

    assert_eq!(result.points, [0, 0]);
    assert_eq!(result.ties, ROUNDS);
    assert_eq!(result.outcome, GameOutcome::Tie { points: 0 });
    assert_eq!(
        result.outcome.to_string(),
        "Game over! It's a tie with 0 points each!"
    );
}

#[test]
fn round_accounting_adds_up() {
    let mut game = Game::new(GameOptions::default(), 42);
    let result = game.play().unwrap();

    let [one, two] = result.points;
    assert_eq!(one + two + result.ties, ROUNDS);
    assert_eq!(game.round(), ROUNDS);
    assert_eq!(game.history(), result.rounds.as_slice());
    for player in game.players() {
        assert_eq!(player.hand_len(), 0);
    }
}

#[test]
fn same_seed_same_game() {
    let a = Game::new(GameOptions::default(), 2024).play().unwrap();
    let b = Game::new(GameOptions::default(), 2024).play().unwrap();

    assert_eq!(a, b);
}

#[test]
fn play_propagates_deal_failure() {
    let mut game = Game::with_deck(GameOptions::default(), Deck::from_cards(Vec::new()));

    assert_eq!(
        game.play().unwrap_err(),
        GameError::Deal(DealError::EmptyDeck)
    );
}
