//! Edge case tests for relayc-lex

use crate::{tokenize, Lexer, Token, TokenKind};

fn lex_all(source: &str) -> Vec<Token> {
    tokenize(source).expect("source should lex cleanly")
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_single_char_ident() {
    let tokens = lex_all("x");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::NameId);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = lex_all(&name);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, name);
}

#[test]
fn test_edge_unit_letters_are_reserved() {
    // "m" and "s" alone are duration suffixes, never identifiers.
    let tokens = lex_all("m s x");
    assert_eq!(tokens[0].kind, TokenKind::UnitMinute);
    assert_eq!(tokens[1].kind, TokenKind::UnitSecond);
    assert_eq!(tokens[2].kind, TokenKind::NameId);
}

#[test]
fn test_edge_adjacent_operators_without_whitespace() {
    // "!>=" keeps the longest registered prefix "!>"; the leftover "="
    // matches nothing and is a lexical error on the next pull.
    let mut lexer = Lexer::new("!>=");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::NotChangeTo);
    let error = lexer.next_token().unwrap_err();
    assert!(error.message.contains('='));
}

#[test]
fn test_edge_operator_error_does_not_consume() {
    let mut lexer = Lexer::new("@");
    assert!(lexer.next_token().is_err());
    // The offending text was not consumed; re-pulling reports it again.
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.offset(), 0);
}

#[test]
fn test_edge_crlf_line_endings() {
    let tokens = lex_all("when\r\nX");
    assert_eq!(tokens[1].position.line, 2);
    assert_eq!(tokens[1].position.column, 1);
}

#[test]
fn test_edge_hash_comment_swallows_operators() {
    let tokens = lex_all("x # -> != @@@\ny");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_edge_block_comment_between_tokens() {
    let tokens = lex_all("when/* glue */X");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::When);
    assert_eq!(tokens[1].kind, TokenKind::StateId);
}

#[test]
fn test_edge_slash_then_comment() {
    // A division followed by a comment: the first "/" is an operator,
    // the "//" after the operand is trivia.
    let tokens = lex_all("a / b // rest\n");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Slash);
}

#[test]
fn test_edge_i64_bounds() {
    use crate::TokenValue;

    let tokens = lex_all("9223372036854775807");
    assert_eq!(tokens[0].value, Some(TokenValue::Int(i64::MAX)));

    assert!(tokenize("9223372036854775808").is_err());
}

#[test]
fn test_edge_hex_is_case_insensitive_in_digits() {
    use crate::TokenValue;

    let tokens = lex_all("0xaB");
    assert_eq!(tokens[0].value, Some(TokenValue::Int(0xAB)));
}

#[test]
fn test_edge_string_next_to_operator() {
    // The quote ends the operator run, so no lookahead bleeds into the
    // string literal.
    let tokens = lex_all(r#"!"x""#);
    assert_eq!(tokens[0].kind, TokenKind::Bang);
    assert_eq!(tokens[1].kind, TokenKind::LitString);
}

#[test]
fn test_edge_eof_position_is_end_of_source() {
    let mut lexer = Lexer::new("ab\n");
    lexer.next_token().unwrap();
    let eof = lexer.next_token().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.position.offset, 3);
    assert_eq!(eof.position.line, 2);
    assert_eq!(eof.lexeme, "");
    assert_eq!(eof.value, None);
}

// ==================== STREAM INVARIANTS ====================

#[test]
fn test_property_fixed_codes_round_trip_through_lexer() {
    // Lexing any canonical code alone yields exactly its kind, with the
    // lexeme equal to the code.
    for &kind in TokenKind::fixed_kinds() {
        let code = kind.code().unwrap();
        let tokens = lex_all(code);
        assert_eq!(tokens.len(), 1, "code {code:?} should lex as one token");
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].lexeme, code);
    }
}

#[test]
fn test_property_positions_are_monotonic() {
    let source = "when Heating (temp >= §limit) -> Cooling\n  every 5 ms poll($4) $$1\n";
    let tokens = lex_all(source);

    let mut last = 0;
    for token in &tokens {
        assert!(token.position.offset >= last);
        last = token.position.offset + token.lexeme.len();

        // Line/column recompute from the consumed prefix.
        let prefix = &source[..token.position.offset];
        let line = prefix.matches('\n').count() as u32 + 1;
        let column = prefix
            .rsplit('\n')
            .next()
            .unwrap_or(prefix)
            .chars()
            .count() as u32
            + 1;
        assert_eq!(token.position.line, line);
        assert_eq!(token.position.column, column);
    }
}

#[test]
fn test_property_arbitrary_letter_runs_lex_as_one_token() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-zA-Z]{1,60}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].lexeme, &input);
    });
}

#[test]
fn test_property_arbitrary_decimal_strings() {
    use proptest::prelude::*;

    proptest!(|(input in "[0-9]{1,18}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::LitDec);
    });
}

#[test]
fn test_property_lexing_is_deterministic() {
    use proptest::prelude::*;

    proptest!(|(input in "(when|Idle|tick|42|0x1F|->|!>|>=|>>|\\$7|\\$\\$0|§| |\n){0,24}")| {
        let first = tokenize(&input).unwrap();
        let second = tokenize(&input).unwrap();
        prop_assert_eq!(first, second);
    });
}

#[test]
fn test_property_whitespace_is_insignificant_padding() {
    use proptest::prelude::*;

    proptest!(|(spaces in 0..100usize)| {
        let pad = " ".repeat(spaces);
        let source = format!("{pad}when{pad}");
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::When);
    });
}
