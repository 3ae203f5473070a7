// Error codes and positions reported through the public API

use sjson::{ErrorCode, Parser, Position, StringView};
use test_log::test;

fn error_at(parser: &Parser<'_>) -> (ErrorCode, u32, u32) {
    let error = parser.error().expect("an error should be recorded");
    (error.code, error.line, error.column)
}

#[test]
fn test_missing_value() {
    let mut parser = Parser::new("{ x = }");
    assert!(parser.object_begins());

    let mut value = 0.0;
    assert!(!parser.read("x", &mut value));
    assert_eq!(error_at(&parser), (ErrorCode::NumberExpected, 1, 7));
    assert_eq!(parser.position(), Position { line: 1, column: 7 });
}

#[test]
fn test_missing_value_for_other_types() {
    let mut parser = Parser::new("{ x = }");
    assert!(parser.object_begins());
    let mut text = StringView::empty();
    assert!(!parser.read("x", &mut text));
    assert_eq!(error_at(&parser), (ErrorCode::QuotationMarkExpected, 1, 7));

    let mut parser = Parser::new("{ x = }");
    assert!(parser.object_begins());
    let mut flag = false;
    assert!(!parser.read("x", &mut flag));
    assert_eq!(error_at(&parser), (ErrorCode::TrueOrFalseExpected, 1, 7));
}

#[test]
fn test_error_on_later_line() {
    let input = "{\n  a = 1\n  b = \"unterminated\n}";
    let mut parser = Parser::new(input);
    assert!(parser.object_begins());
    let mut a = 0.0;
    assert!(parser.read("a", &mut a));
    let mut b = StringView::empty();
    assert!(!parser.read("b", &mut b));
    assert_eq!(error_at(&parser), (ErrorCode::InputTruncated, 4, 2));
}

#[test]
fn test_wrong_key_reports_key_position() {
    let mut parser = Parser::new("\n\n   height = 3");
    let mut width = 0u32;
    assert!(!parser.read("width", &mut width));
    assert_eq!(error_at(&parser), (ErrorCode::IncorrectKey, 3, 4));
    assert_eq!(parser.position(), Position { line: 3, column: 4 });
}

#[test]
fn test_key_errors() {
    let mut parser = Parser::new("= 1");
    assert!(!parser.read_key("x"));
    assert_eq!(error_at(&parser), (ErrorCode::KeyExpected, 1, 1));

    let mut parser = Parser::new("ab\"c = 1");
    assert!(!parser.read_key("abc"));
    assert_eq!(
        error_at(&parser),
        (ErrorCode::CannotUseQuotationMarkInUnquotedString, 1, 3)
    );

    let mut parser = Parser::new("   ");
    assert!(!parser.read_key("x"));
    assert_eq!(error_at(&parser), (ErrorCode::InputTruncated, 1, 4));
}

#[test]
fn test_key_matching_is_case_sensitive() {
    let mut parser = Parser::new("foo = 1");
    let before = parser.save_state();
    assert!(!parser.read_key("Foo"));
    assert_eq!(error_at(&parser), (ErrorCode::IncorrectKey, 1, 1));
    assert_eq!(parser.save_state().offset(), before.offset());
    assert_eq!(parser.position(), before.position());
}

#[test]
fn test_missing_equal_sign() {
    let mut parser = Parser::new("x : 1");
    let mut value = 0.0;
    assert!(!parser.read("x", &mut value));
    assert_eq!(error_at(&parser), (ErrorCode::EqualSignExpected, 1, 3));
}

#[test]
fn test_bad_boolean_rewinds_to_literal_start() {
    let mut parser = Parser::new("flag = trueish");
    let mut flag = false;
    // `true` matches, the rest is left for the next read
    assert!(parser.read("flag", &mut flag));
    assert!(flag);
    assert_eq!(parser.position(), Position { line: 1, column: 12 });

    let mut parser = Parser::new("flag = truthy");
    assert!(!parser.read("flag", &mut flag));
    assert_eq!(error_at(&parser), (ErrorCode::TrueOrFalseExpected, 1, 8));

    let mut parser = Parser::new("flag = tru");
    assert!(!parser.read("flag", &mut flag));
    assert_eq!(error_at(&parser), (ErrorCode::TrueOrFalseExpected, 1, 8));
    assert_eq!(parser.position(), Position { line: 1, column: 8 });
}

#[test]
fn test_unterminated_block_comment() {
    let mut parser = Parser::new("/* comment");
    assert!(!parser.skip_comments_and_whitespace());
    assert_eq!(error_at(&parser), (ErrorCode::InputTruncated, 1, 11));

    let mut parser = Parser::new("{ /* comment");
    assert!(parser.object_begins());
    assert!(!parser.object_ends());
    assert_eq!(parser.error().map(|e| e.code), Some(ErrorCode::InputTruncated));
}

#[test]
fn test_comment_begins_incorrectly() {
    let mut parser = Parser::new("{ /x }");
    assert!(parser.object_begins());
    assert!(!parser.object_ends());
    assert_eq!(error_at(&parser), (ErrorCode::CommentBeginsIncorrectly, 1, 4));
}

#[test]
fn test_unexpected_content_at_end() {
    let mut parser = Parser::new("{}\n}");
    assert!(parser.object_begins());
    assert!(parser.object_ends());
    assert!(!parser.remainder_is_comments_and_whitespace());
    assert_eq!(error_at(&parser), (ErrorCode::UnexpectedContentAtEnd, 2, 1));
}

#[test]
fn test_number_errors() {
    let mut value = 0.0;

    let mut parser = Parser::new("x = 01");
    assert!(!parser.read("x", &mut value));
    assert_eq!(error_at(&parser), (ErrorCode::InvalidNumber, 1, 6));

    let mut parser = Parser::new("x = 1e+");
    assert!(!parser.read("x", &mut value));
    assert_eq!(error_at(&parser), (ErrorCode::InvalidNumber, 1, 8));

    let mut parser = Parser::new("x = .5");
    assert!(!parser.read("x", &mut value));
    assert_eq!(error_at(&parser), (ErrorCode::NumberExpected, 1, 5));

    let long = format!("x = {}", "9".repeat(64));
    let mut parser = Parser::new(&long);
    assert!(!parser.read("x", &mut value));
    assert_eq!(error_at(&parser), (ErrorCode::NumberIsTooLong, 1, 69));

    let mut small = 0i32;
    let mut parser = Parser::new("x = 3000000000");
    assert!(!parser.read("x", &mut small));
    assert_eq!(
        error_at(&parser),
        (ErrorCode::NumberCouldNotBeConverted, 1, 15)
    );
}

#[test]
fn test_error_persists_after_success() {
    let mut parser = Parser::new("[ 1 ]");
    assert!(!parser.object_begins());
    assert!(parser.array_begins());
    // Not cleared by the successful call
    assert_eq!(error_at(&parser), (ErrorCode::OpeningBraceExpected, 1, 1));
}

#[test]
fn test_error_display() {
    let mut parser = Parser::new("\n  ]");
    assert!(!parser.array_begins());
    let error = parser.error().unwrap();
    assert_eq!(error.to_string(), "Opening bracket expected at line 2, column 3");
}

#[test]
fn test_skipping_errors() {
    let mut parser = Parser::new("extra = null");
    assert!(!parser.skip_pair());
    assert_eq!(error_at(&parser), (ErrorCode::ValueExpected, 1, 9));

    let input = format!("extra = {}1{}", "[".repeat(65), "]".repeat(65));
    let mut parser = Parser::new(&input);
    assert!(!parser.skip_pair());
    assert_eq!(error_at(&parser), (ErrorCode::NestingTooDeep, 1, 73));
    assert_eq!(
        parser.error().unwrap().to_string(),
        "Nesting too deep at line 1, column 73"
    );
}
