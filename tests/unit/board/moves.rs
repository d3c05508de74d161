use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn token_splits_into_start_and_end() {
    let m: Move = "e2e4".parse().unwrap();
    assert_eq!(m.from, sq("e2"));
    assert_eq!(m.to, sq("e4"));
    assert_eq!(m.to_string(), "e2e4");
    assert_eq!(Move::new(sq("g1"), sq("f3")).to_string(), "g1f3");
}

#[test]
fn token_is_case_insensitive() {
    assert_eq!("E2E4".parse::<Move>().unwrap(), "e2e4".parse().unwrap());
}

#[test]
fn malformed_tokens_fail() {
    for bad in ["z9e4", "e2e9", "e2", "e2e4q", "", "e2 e4", "éé"] {
        let err = bad.parse::<Move>().unwrap_err();
        assert!(err.to_string().contains("invalid move:"), "{bad}: {err}");
    }
}

#[test]
fn move_list_trims_tokens() {
    let moves = parse_move_list(" e2e4 , d7d5,g1f3 ").unwrap();
    let tokens: Vec<String> = moves.iter().map(ToString::to_string).collect();
    assert_eq!(tokens, ["e2e4", "d7d5", "g1f3"]);
}

#[test]
fn blank_move_list_is_empty() {
    assert!(parse_move_list("").unwrap().is_empty());
    assert!(parse_move_list("   ").unwrap().is_empty());
}

#[test]
fn empty_token_in_list_fails() {
    assert!(parse_move_list("e2e4,,d2d4").is_err());
    assert!(parse_move_list("e2e4,").is_err());
}

#[test]
fn one_bad_token_fails_the_whole_list() {
    let err = parse_move_list("e2e4,z9e4,d2d4").unwrap_err();
    assert!(err.to_string().contains("z9e4"));
}

#[test]
fn multibyte_file_names_the_bad_square() {
    let err = "€2e4".parse::<Move>().unwrap_err().to_string();
    assert!(err.contains("square '€2'"), "{err}");
    assert!(!err.contains("must be 4 characters"), "{err}");
}
