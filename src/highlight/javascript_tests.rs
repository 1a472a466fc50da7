    use super::*;

    fn span(class: &str, text: &str) -> String {
        format!(r#"<span class="syntax-{class}">{text}</span>"#)
    }

    #[test]
    fn test_js_var_declaration() {
        assert_eq!(
            highlight_javascript("var x=1;"),
            format!(
                "{} x{}{}{}",
                span("keyword", "var"),
                span("operator", "="),
                span("number", "1"),
                span("punctuation", ";")
            )
        );
    }

    #[test]
    fn test_js_comments() {
        let out = highlight_javascript("a // line <b>\n/* block\n */ c");
        assert!(out.contains(&span("comment", "// line &lt;b&gt;")));
        assert!(out.contains(&span("comment", "/* block\n */")));
        assert!(out.ends_with(" c"));
    }

    #[test]
    fn test_js_strings_stop_at_newline() {
        let out = highlight_javascript("'open\nlet");
        assert!(out.starts_with(&span("string", "&#039;open")));
        assert!(out.ends_with(&format!("\n{}", span("keyword", "let"))));
    }

    #[test]
    fn test_js_string_escapes() {
        let out = highlight_javascript(r#""a\"b" + 'c'"#);
        assert!(out.contains(&span("string", r#"&quot;a\&quot;b&quot;"#)));
        assert!(out.contains(&span("string", "&#039;c&#039;")));
    }

    #[test]
    fn test_js_template_literal_with_interpolation() {
        let out = highlight_javascript("`a ${ {b: `x`}.b } c` + 1");
        assert!(out.starts_with(&span("template", "`a ${ {b: `x`}.b } c`")));
        assert!(out.ends_with(&span("number", "1")));
    }

    #[test]
    fn test_js_regex_after_operator() {
        let out = highlight_javascript("x = /ab+c/gi.test(s)");
        assert!(out.contains(&span("regex", "/ab+c/gi")));
    }

    #[test]
    fn test_js_regex_after_keyword() {
        let out = highlight_javascript("return /[/]x/;");
        assert!(out.contains(&span("regex", "/[/]x/")));
    }

    #[test]
    fn test_js_regex_at_start_of_input() {
        let out = highlight_javascript("/a\\/b/.source");
        assert!(out.starts_with(&span("regex", "/a\\/b/")));
    }

    #[test]
    fn test_js_division_after_identifier_and_paren() {
        let out = highlight_javascript("a / b + (c) / 2");
        assert!(!out.contains("syntax-regex"));
        assert_eq!(out.matches(&span("operator", "/")).count(), 2);
    }

    #[test]
    fn test_js_unterminated_regex_is_operator() {
        let out = highlight_javascript("x = /abc\ny");
        assert!(!out.contains("syntax-regex"));
        assert!(out.contains(&span("operator", "/")));
    }

    #[test]
    fn test_js_can_precede_regex() {
        assert!(can_precede_regex(""));
        assert!(can_precede_regex("("));
        assert!(can_precede_regex("=>"));
        assert!(can_precede_regex("typeof"));
        assert!(can_precede_regex("return"));
        assert!(!can_precede_regex(")"));
        assert!(!can_precede_regex("]"));
        assert!(!can_precede_regex("x"));
        assert!(!can_precede_regex("42"));
        assert!(!can_precede_regex("++"));
    }

    #[test]
    fn test_js_number_forms() {
        for n in ["42", "3.14", ".5", "1e-7", "0xFF", "0o17", "0b1010", "10n", "1_000"] {
            let out = highlight_javascript(n);
            assert_eq!(out, span("number", n), "{n}");
        }
    }

    #[test]
    fn test_js_member_access_after_number() {
        let out = highlight_javascript("arr[0].x");
        assert!(out.contains(&span("number", "0")));
        assert!(out.contains(&span("punctuation", ".")));
    }

    #[test]
    fn test_js_builtins() {
        let out = highlight_javascript("true false null undefined");
        assert!(out.contains(&span("boolean", "true")));
        assert!(out.contains(&span("boolean", "false")));
        assert!(out.contains(&span("null", "null")));
        assert!(out.contains(&span("null", "undefined")));
    }

    #[test]
    fn test_js_identifiers_are_plain_text() {
        assert_eq!(highlight_javascript("foo_bar $el"), "foo_bar $el");
    }

    #[test]
    fn test_js_longest_operator_match() {
        let out = highlight_javascript("a === b ?? c => d >>>= 1");
        assert!(out.contains(&span("operator", "===")));
        assert!(out.contains(&span("operator", "??")));
        assert!(out.contains(&span("operator", "=&gt;")));
        assert!(out.contains(&span("operator", "&gt;&gt;&gt;=")));
    }

    #[test]
    fn test_js_unknown_chars_pass_through() {
        assert_eq!(highlight_javascript("@#"), "@#");
    }
