    use super::*;

    fn span(class: &str, text: &str) -> String {
        format!(r#"<span class="syntax-{class}">{text}</span>"#)
    }

    #[test]
    fn test_html_element_with_attribute() {
        let expected = [
            span("punctuation", "&lt;"),
            span("tag", "div"),
            " ".to_string(),
            span("attribute", "class"),
            span("punctuation", "="),
            span("string", "&quot;a&quot;"),
            span("punctuation", "&gt;"),
            "hi".to_string(),
            span("punctuation", "&lt;/"),
            span("tag", "div"),
            span("punctuation", "&gt;"),
        ]
        .concat();
        assert_eq!(highlight_html(r#"<div class="a">hi</div>"#), expected);
    }

    #[test]
    fn test_html_unquoted_and_boolean_attributes() {
        let out = highlight_html("<input type=text disabled/>");
        assert!(out.contains(&span("attribute", "type")));
        assert!(out.contains(&span("string", "text")));
        assert!(out.contains(&span("attribute", "disabled")));
        assert!(out.ends_with(&span("punctuation", "/&gt;")));
    }

    #[test]
    fn test_html_quoted_value_may_contain_gt() {
        let out = highlight_html(r##"<a title='x > y' href="#">"##);
        assert!(out.contains(&span("string", "&#039;x &gt; y&#039;")));
        assert!(out.contains(&span("attribute", "href")));
    }

    #[test]
    fn test_html_comment_doctype_cdata() {
        let out = highlight_html("<!DOCTYPE html>\n<!-- <b> -->\n<![CDATA[x<y]]>");
        assert!(out.contains(&span("doctype", "&lt;!DOCTYPE html&gt;")));
        assert!(out.contains(&span("comment", "&lt;!-- &lt;b&gt; --&gt;")));
        assert!(out.contains(&span("comment", "&lt;![CDATA[x&lt;y]]&gt;")));
    }

    #[test]
    fn test_html_lowercase_doctype() {
        let out = highlight_html("<!doctype html>");
        assert_eq!(out, span("doctype", "&lt;!doctype html&gt;"));
    }

    #[test]
    fn test_html_lone_angle_bracket_is_text() {
        assert_eq!(highlight_html("a < b"), "a &lt; b");
    }

    #[test]
    fn test_html_script_body_delegated_to_javascript() {
        let out = highlight_html("<script>var x=1;</script>");
        assert!(out.contains(&span("keyword", "var")));
        assert!(out.contains(&span("number", "1")));
        assert!(out.ends_with(&format!(
            "{}{}{}",
            span("punctuation", "&lt;/"),
            span("tag", "script"),
            span("punctuation", "&gt;")
        )));
    }

    #[test]
    fn test_html_style_body_delegated_to_css() {
        let out = highlight_html("<style media=\"screen\">a:hover{color:red}</style>");
        assert!(out.contains(&span("attribute", "media")));
        assert!(out.contains(&span("selector", "a:hover")));
        assert!(out.contains(&span("property", "color")));
        assert!(out.contains(&span("value", "red")));
    }

    #[test]
    fn test_html_embedded_body_not_parsed_as_html() {
        let out = highlight_html("<script>if (a<b) {}</script>");
        assert!(!out.contains(&span("tag", "b")));
        assert!(out.contains(&span("operator", "&lt;")));
    }

    #[test]
    fn test_html_closing_tag_case_and_whitespace_tolerant() {
        let out = highlight_html("<SCRIPT>let y</ SCRIPT >");
        assert!(out.contains(&span("keyword", "let")));
        assert!(out.contains(&span("tag", "SCRIPT")));
        assert!(out.ends_with(&format!(
            "{} {} {}",
            span("punctuation", "&lt;/"),
            span("tag", "SCRIPT"),
            span("punctuation", "&gt;")
        )));
    }

    #[test]
    fn test_html_unterminated_script_falls_back_to_text() {
        let out = highlight_html("<script>var x = 1");
        assert!(!out.contains(&span("keyword", "var")));
        assert!(out.ends_with("var x = 1"));
    }

    #[test]
    fn test_html_closing_style_is_not_embedded() {
        let out = highlight_html("</style>a{b:c}");
        assert!(!out.contains("syntax-property"));
        assert!(out.ends_with("a{b:c}"));
    }

    #[test]
    fn test_html_broken_tag_recovers_on_next_tag() {
        let out = highlight_html("<a href<b>x</b>");
        assert!(out.contains(&span("tag", "b")));
    }

    #[test]
    fn test_tag_attributes_sub_highlighter() {
        let out = highlight_tag_attributes(r#" type="module" async>"#);
        let expected = [
            " ".to_string(),
            span("attribute", "type"),
            span("punctuation", "="),
            span("string", "&quot;module&quot;"),
            " ".to_string(),
            span("attribute", "async"),
            span("punctuation", "&gt;"),
        ]
        .concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_tag_attributes_unquoted_and_self_closing() {
        let out = highlight_tag_attributes(" a = b />");
        assert!(out.contains(&span("attribute", "a")));
        assert!(out.contains(&span("string", "b")));
        assert!(out.ends_with(&span("punctuation", "/&gt;")));
    }

    #[test]
    fn test_opening_tag_len_skips_quotes() {
        assert_eq!(opening_tag_len(r#" a="x>y">body"#), Some(9));
        assert_eq!(opening_tag_len(" a='open"), None);
    }
