#![cfg(feature = "std")]

use tictactoe::parse_move;

#[test]
fn test_parse_valid_move() {
    assert_eq!(parse_move("1 2"), Some((1, 2)));
    assert_eq!(parse_move("0 0"), Some((0, 0)));
    assert_eq!(parse_move("  4   7  "), Some((4, 7)));
    assert_eq!(parse_move("1\t2\n"), Some((1, 2)));
}

#[test]
fn test_parse_rejects_wrong_token_count() {
    assert_eq!(parse_move(""), None);
    assert_eq!(parse_move("1"), None);
    assert_eq!(parse_move("1 2 3"), None);
}

#[test]
fn test_parse_rejects_non_integers() {
    assert_eq!(parse_move("a b"), None);
    assert_eq!(parse_move("1 b"), None);
    assert_eq!(parse_move("1.5 2"), None);
}

#[test]
fn test_parse_rejects_negative_coordinates() {
    // negatives are malformed input, not out-of-bounds moves
    assert_eq!(parse_move("-1 0"), None);
    assert_eq!(parse_move("0 -2"), None);
}

#[test]
fn test_parse_accepts_coordinates_beyond_any_board() {
    // bounds checking belongs to the board, not the parser
    assert_eq!(parse_move("100 100"), Some((100, 100)));
}
