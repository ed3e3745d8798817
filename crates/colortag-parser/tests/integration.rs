use colortag_parser::{parse_code_from_attr, validate_tags, TagParser, TagTransform};
use std::collections::HashMap;

fn test_codes() -> HashMap<&'static str, &'static str> {
    HashMap::from([("red", "0;31"), ("bold", "1"), ("info", "0;32")])
}

#[test]
fn test_transform_modes() {
    let codes = test_codes();
    let input = "<red>hello</> <bold>world</> <d>";

    let parser = TagParser::new(&codes, TagTransform::Apply);
    assert_eq!(
        parser.parse(input),
        "\x1b[0;31mhello\x1b[0m \x1b[1mworld\x1b[0m <d>"
    );

    let parser = TagParser::new(&codes, TagTransform::Remove);
    assert_eq!(parser.parse(input), "hello world <d>");

    let parser = TagParser::new(&codes, TagTransform::Strip);
    assert_eq!(parser.parse(input), "hello world ");
}

#[test]
fn test_compact_ansi_output() {
    // One opening sequence and one reset per tag, not per character
    let codes = test_codes();
    let parser = TagParser::new(&codes, TagTransform::Apply);

    let output = parser.parse("<red>text</>");
    let escape_count = output.matches("\x1b[").count();

    assert_eq!(
        escape_count, 2,
        "Expected exactly 2 escapes for 'text'. Output: {:?}",
        output
    );
}

#[test]
fn test_multiline_samples() {
    let codes = HashMap::from([("err", "97;41"), ("info", "0;32")]);
    let parser = TagParser::new(&codes, TagTransform::Apply);

    let input = "abc <err>err-text</> \ndef <info>info text\n</>";
    let output = parser.parse(input);
    assert!(!output.contains('<'));
    assert!(!output.contains('>'));
    assert!(output.ends_with("\x1b[0;32minfo text\n\x1b[0m"));
}

#[test]
fn test_attribute_tag_matches_parsed_code() {
    let codes = test_codes();
    let parser = TagParser::new(&codes, TagTransform::Apply);

    let body = "fg=lightRed;bg=lightRed;op=bold,blink";
    let code = parse_code_from_attr(body);
    assert_eq!(code, "91;100;1;5");
    assert_eq!(
        parser.parse(&format!("<{}>x</>", body)),
        format!("\x1b[{}mx\x1b[0m", code)
    );
}

#[test]
fn test_validation_agrees_with_rendering() {
    let codes = test_codes();
    let input = "<red>a</> <nope>b</>";

    let errors = validate_tags(input, &codes).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors[0].tag, "nope");

    // The reported tag is exactly the one left untouched
    let output = TagParser::new(&codes, TagTransform::Apply).parse(input);
    assert!(output.contains("<nope>b</>"));
}
