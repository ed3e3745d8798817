use colortag::{
    apply_tag, clear_tag, color_tags, force_open_color_render, fprintln, is_like_in_cmd,
    parse_code_from_attr, render, replace_tag, reset_output, set_enabled, set_output, sprint,
    tag, tag_code, text, wrap_tag,
};
use serial_test::serial;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
#[serial]
fn test_replace_tag_samples() {
    let _guard = force_open_color_render();

    for input in [
        "<err>text</>",
        "abc <err>err-text</> def <info>info text</>",
        "custom tag: <fg=yellow;bg=black;op=underscore;>hello, welcome</>",
    ] {
        let output = replace_tag(input);
        assert!(!output.contains('<'), "{:?}", output);
        assert!(!output.contains('>'), "{:?}", output);
    }

    let output = replace_tag("abc <err>err-text</> def <d>");
    assert!(!output.contains("<err>"));
    assert!(output.contains("<d>"));
}

#[test]
#[serial]
fn test_disabled_text() {
    set_enabled(false);
    let output = text("<err>text</>");
    set_enabled(true);
    assert_eq!(output, "text");
}

#[test]
fn test_attribute_codes() {
    assert_eq!(parse_code_from_attr("="), "");
    assert_eq!(
        parse_code_from_attr("fg=lightRed;bg=lightRed;op=bold,blink"),
        "91;100;1;5"
    );
    assert_eq!(
        parse_code_from_attr("fg= lightRed;bg=lightRed;op=bold,"),
        "91;100;1"
    );
}

#[test]
fn test_attribute_output_is_not_an_attribute_body() {
    let code = parse_code_from_attr("fg=red;bg=black;op=bold");
    assert_eq!(code, "31;40;1");
    assert_eq!(parse_code_from_attr(&code), "");
}

#[test]
#[serial]
fn test_sprint() {
    let _guard = force_open_color_render();
    assert_eq!(sprint(&[&"<red>MSG</>"]), "\x1b[0;31mMSG\x1b[0m");
    assert_eq!(
        sprint(&[&"<red>H</><green>I</>"]),
        "\x1b[0;31mH\x1b[0m\x1b[0;32mI\x1b[0m"
    );
}

#[test]
#[serial]
fn test_sprint_operand_spacing() {
    let _guard = force_open_color_render();
    assert_eq!(sprint(&[&1, &2]), "1 2");
    assert_eq!(sprint(&[&"a", &1, &2, &"b"]), "a1 2b");
    assert_eq!(render(&[&"<info>", &7, &8, &"</>"]), "\x1b[0;32m7 8\x1b[0m");
}

#[test]
#[serial]
fn test_tag_helpers() {
    let _guard = force_open_color_render();

    assert_eq!(tag_code("info"), "0;32");
    assert_eq!(tag_code("not-exist"), "");
    assert_eq!(apply_tag("info", "MSG"), "\x1b[0;32mMSG\x1b[0m");
    assert_eq!(tag("mga").sprint(&[&"msg"]), "\x1b[0;35mmsg\x1b[0m");
    assert_eq!(render(&[]), "");

    assert_eq!(wrap_tag("", "info"), "");
    assert_eq!(wrap_tag("body", ""), "body");
}

#[test]
fn test_clear_tag() {
    assert_eq!(
        clear_tag("abc <err>error</> def <info>info text</>"),
        "abc error def info text"
    );
    assert_eq!(clear_tag("abc <err>text</> def<d>"), "abc text def");
}

#[test]
#[serial]
fn test_fprintln_to_sink() {
    let _guard = force_open_color_render();
    let mut sink = Vec::new();
    fprintln(&mut sink, &[&"<red>hello</>", &"world"]).unwrap();
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "\x1b[0;31mhello\x1b[0m world\n"
    );
}

#[test]
#[serial]
fn test_redirected_stdout() {
    let _guard = force_open_color_render();
    let capture = Capture::default();
    set_output(capture.clone());

    colortag::println(&[&"<info>ready</>"]);
    colortag::cprintln!("<warn>{} left</>", 3);
    tag("err").print(&[&"boom"]);

    reset_output();

    let expected = "\x1b[0;32mready\x1b[0m\n\x1b[0;1;33m3 left\x1b[0m\n\x1b[97;41mboom\x1b[0m";
    if is_like_in_cmd() {
        assert_eq!(capture.contents(), colortag::clear_code(expected));
    } else {
        assert_eq!(capture.contents(), expected);
    }
}

#[test]
#[serial]
fn test_every_registered_tag_renders() {
    let _guard = force_open_color_render();

    for (name, code) in color_tags() {
        let output = replace_tag(&format!("<{}>body</>", name));
        assert_eq!(output, format!("\x1b[{}mbody\x1b[0m", code));
        assert!(!output.contains("</>"));
    }
}

#[test]
#[serial]
fn test_nested_tags_outer_wins() {
    let _guard = force_open_color_render();
    assert_eq!(
        replace_tag("<red>a <info>b</> c</>"),
        "\x1b[0;31ma <info>b\x1b[0m c</>"
    );
}
