use tictactoe::{next_mark, Board, Mark};

fn board_with(xs: &[usize], os: &[usize]) -> Board {
    let mut b = Board::blank();
    for &i in xs { assert!(b.place(i, Mark::X)); }
    for &i in os { assert!(b.place(i, Mark::O)); }
    b
}

#[test]
fn x_moves_on_blank_board() {
    assert_eq!(next_mark(&Board::blank()), Mark::X);
}

#[test]
fn x_moves_whenever_counts_are_equal() {
    let cases: [(&[usize], &[usize]); 4] = [
        (&[0], &[1]),
        (&[4, 8], &[0, 2]),
        (&[0, 1, 5], &[2, 3, 4]),
        (&[0, 2, 4, 7], &[1, 3, 5, 6]),
    ];
    for (xs, os) in cases {
        assert_eq!(next_mark(&board_with(xs, os)), Mark::X, "xs={xs:?} os={os:?}");
    }
}

#[test]
fn o_moves_when_x_is_ahead() {
    assert_eq!(next_mark(&board_with(&[4], &[])), Mark::O);
    assert_eq!(next_mark(&board_with(&[0, 8], &[4])), Mark::O);
    // Hand-edited boards can put X two ahead; O still moves.
    assert_eq!(next_mark(&board_with(&[0, 1, 2], &[])), Mark::O);
}

#[test]
fn x_moves_when_o_is_ahead() {
    assert_eq!(next_mark(&board_with(&[], &[4])), Mark::X);
}
