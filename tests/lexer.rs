use retrace::{LexError, Token, lex};

#[test]
fn lexes_metacharacters_outside_classes() {
    let tokens = lex("a.b*|^$").expect("pattern should lex");
    assert_eq!(
        tokens,
        vec![
            Token::Literal('a'),
            Token::Dot,
            Token::Literal('b'),
            Token::Star,
            Token::Pipe,
            Token::Caret,
            Token::Dollar,
            Token::End,
        ]
    );
}

#[test]
fn treats_class_body_as_literal_characters() {
    let tokens = lex("[a+.]").expect("pattern should lex");
    assert_eq!(
        tokens,
        vec![
            Token::LBracket,
            Token::Literal('a'),
            Token::Literal('+'),
            Token::Literal('.'),
            Token::RBracket,
            Token::End,
        ]
    );
}

#[test]
fn lexes_range_dash_inside_class() {
    let tokens = lex("[a-c]").expect("pattern should lex");
    assert_eq!(
        tokens,
        vec![
            Token::LBracket,
            Token::Literal('a'),
            Token::Dash,
            Token::Literal('c'),
            Token::RBracket,
            Token::End,
        ]
    );
}

#[test]
fn marks_only_the_leading_caret_in_a_class() {
    let tokens = lex("[^a^]").expect("pattern should lex");
    assert_eq!(
        tokens,
        vec![
            Token::LBracket,
            Token::Caret,
            Token::Literal('a'),
            Token::Literal('^'),
            Token::RBracket,
            Token::End,
        ]
    );
}

#[test]
fn always_appends_the_end_token() {
    let tokens = lex("").expect("empty pattern should lex");
    assert_eq!(tokens, vec![Token::End]);
}

#[test]
fn reports_an_unterminated_class_with_its_offset() {
    let err = lex("ab[cd").expect_err("unterminated class should fail");
    match err {
        LexError::UnterminatedClass { pattern, start } => {
            assert_eq!(pattern, "ab[cd");
            assert_eq!(start, 2);
        }
    }
}
