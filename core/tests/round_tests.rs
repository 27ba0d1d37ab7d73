use prizegrid_core::*;

fn round_with_prizes(prizes: &[CellIndex]) -> Round {
    let config = RoundConfig::default();
    let layout = PrizeLayout::from_prize_cells(config.size(), prizes).unwrap();
    Round::with_layout(config, layout).unwrap()
}

#[test]
fn scripted_win() {
    let mut round = round_with_prizes(&[2, 5, 9]);

    let results: Vec<_> = [0, 2, 1, 5, 3, 9]
        .into_iter()
        .map(|index| round.reveal(index).unwrap())
        .collect();

    let summary: Vec<_> = results
        .iter()
        .map(|r| (r.ignored, r.is_prize, r.found_prizes))
        .collect();
    assert_eq!(
        summary,
        [
            (false, false, 0),
            (false, true, 1),
            (false, false, 1),
            (false, true, 2),
            (false, false, 2),
            (false, true, 3),
        ]
    );
    assert!(results[..5].iter().all(|r| r.state == RoundState::InProgress));
    assert_eq!(results[5].state, RoundState::Won);
    assert_eq!(round.attempts(), 6);
    assert_eq!(round.state(), RoundState::Won);
}

#[test]
fn scripted_loss() {
    let mut round = round_with_prizes(&[2, 5, 9]);

    let mut last = None;
    for index in [0, 1, 3, 4, 6, 7] {
        last = Some(round.reveal(index).unwrap());
    }

    let last = last.unwrap();
    assert_eq!(last.state, RoundState::Lost);
    assert_eq!(last.found_prizes, 0);
    assert_eq!(round.attempts(), 6);
}

#[test]
fn too_many_prizes_is_a_configuration_error() {
    let err =
        Round::start(RoundConfig::new(3, 5, 20, 6), RandomPrizeGenerator::new(0)).unwrap_err();

    assert!(matches!(
        err,
        GameError::InvalidConfiguration(ConfigError::TooManyPrizes { .. })
    ));
}

#[test]
fn counters_track_revealed_cells() {
    for seed in 0..100u64 {
        let mut round =
            Round::start(RoundConfig::default(), RandomPrizeGenerator::new(seed)).unwrap();
        let prizes = round.prize_cells();
        // walk the grid with repeats to exercise the no-op path
        let order = (0..15).rev().flat_map(|index| [index, index]);

        for index in order {
            let before = round.clone();
            let result = round.reveal(index).unwrap();

            if result.ignored {
                assert_eq!(round, before);
                continue;
            }

            let revealed = round.revealed_cells();
            let found = revealed.iter().filter(|&&cell| prizes.contains(&cell)).count();
            assert_eq!(usize::from(round.attempts()), revealed.len());
            assert_eq!(usize::from(round.found_prizes()), found);
            assert!(round.attempts() <= 6);
            assert_eq!(result.is_prize, prizes.contains(&index));
            match result.state {
                RoundState::Won => assert_eq!(result.found_prizes, 3),
                RoundState::Lost => {
                    assert_eq!(result.attempts, 6);
                    assert!(result.found_prizes < 3);
                }
                RoundState::InProgress => assert!(result.found_prizes < 3 && result.attempts < 6),
            }
        }

        assert!(round.is_finished());
    }
}

#[test]
fn session_plays_consecutive_rounds() {
    let mut session = GameSession::new(RoundConfig::default(), 2024).unwrap();

    for _ in 0..10 {
        let mut index = 0;
        while !session.round().is_finished() {
            session.reveal(index).unwrap();
            index += 1;
        }
        let round = session.reset().unwrap();
        assert_eq!(round.state(), RoundState::InProgress);
        assert_eq!(round.attempts(), 0);
    }

    assert_eq!(session.rounds_started(), 11);
}
