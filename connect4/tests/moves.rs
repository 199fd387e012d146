use connect4::*;

/// Walk every legal move from a handful of positions and check what `play` changes.
fn check_every_move(game: &Connect4) -> Result<(), PlayError> {
    for my_move in game.possible_moves() {
        let column = my_move.column();
        let mut next = *game;
        next.play(my_move)?;

        assert_eq!(next.height(column), game.height(column) + 1);
        assert_eq!(next.board.occupied(), game.board.occupied() + 1);
        assert_eq!(next.board.get(column, game.height(column)), Some(game.to_move));
        assert_eq!(next.to_move, game.to_move.next());
        assert_eq!(next.ply, game.ply + 1);
        for other in (0..COLUMNS).filter(|&c| c != column) {
            assert_eq!(next.height(other), game.height(other));
        }
    }
    Ok(())
}

#[test]
fn legal_moves_change_exactly_one_cell() -> Result<(), PlayError> {
    check_every_move(&Connect4::default())?;
    check_every_move(&Connect4::from_moves(&[3, 3, 2, 4, 4, 4, 4, 4])?)?;
    check_every_move(&Connect4::from_moves(&[0, 0, 0, 0, 0, 0, 6, 1])?)?;
    check_every_move(&Connect4::with_first(Colour::Red))
}

#[test]
fn heights_match_board() -> Result<(), PlayError> {
    let game = Connect4::from_moves(&[1, 2, 2, 3, 3, 5, 3, 6, 6, 6])?;
    for column in 0..COLUMNS {
        assert_eq!(game.height(column), game.board.column_count(column));
    }
    Ok(())
}

#[test]
fn illegal_moves_leave_game_unchanged() -> Result<(), PlayError> {
    let mut game = Connect4::from_moves(&[4, 4, 4, 4, 4, 4, 2])?;
    let before = game;
    assert_eq!(game.play(Move::new(4)), Err(PlayError::ColumnFull(4)));
    assert_eq!(game.play(Move::new(COLUMNS)), Err(PlayError::InvalidColumn(COLUMNS)));
    assert_eq!(game.play(Move::new(usize::MAX)), Err(PlayError::InvalidColumn(usize::MAX)));
    assert_eq!(game, before);
    Ok(())
}

#[test]
fn copies_are_independent() -> Result<(), PlayError> {
    let original = Connect4::from_moves(&[3, 2])?;
    let mut copy = original;
    copy.play(Move::new(3))?;
    copy.play(Move::new(0))?;
    assert_eq!(original.ply, 2);
    assert_eq!(original.height(3), 1);
    assert_eq!(original.board.get(0, 0), None);
    assert_ne!(copy, original);
    Ok(())
}

#[test]
fn parsed_human_input_plays() -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Connect4::default();
    game.play("4".parse()?)?;
    assert_eq!(game.board.get(3, 0), Some(Colour::Yellow));
    assert!(game.play("9".parse()?).is_err());
    Ok(())
}
