    use super::*;

    #[test]
    fn test_css_pseudo_class_stays_in_selector() {
        assert_eq!(
            highlight_css("a:hover{color:red}"),
            concat!(
                r#"<span class="syntax-selector">a:hover</span>"#,
                r#"<span class="syntax-punctuation">{</span>"#,
                r#"<span class="syntax-property">color</span>"#,
                r#"<span class="syntax-punctuation">:</span>"#,
                r#"<span class="syntax-value">red</span>"#,
                r#"<span class="syntax-punctuation">}</span>"#,
            )
        );
    }

    #[test]
    fn test_css_semicolon_returns_to_property() {
        let out = highlight_css(".a { margin: 0; padding: 1px }");
        assert!(out.contains(r#"<span class="syntax-property">margin</span>"#));
        assert!(out.contains(r#"<span class="syntax-value">0</span>"#));
        assert!(out.contains(r#"<span class="syntax-property">padding</span>"#));
        assert!(out.contains(r#"<span class="syntax-value">1px</span>"#));
    }

    #[test]
    fn test_css_comment_whole() {
        let out = highlight_css("/* a: b; { } */ p{}");
        assert!(out.starts_with(r#"<span class="syntax-comment">/* a: b; { } */</span> "#));
        assert!(out.contains(r#"<span class="syntax-selector">p</span>"#));
    }

    #[test]
    fn test_css_unterminated_comment_runs_to_end() {
        assert_eq!(
            highlight_css("/* open"),
            r#"<span class="syntax-comment">/* open</span>"#
        );
    }

    #[test]
    fn test_css_strings_bypass_buffer() {
        let out = highlight_css(r#"a::before { content: "x;}" }"#);
        assert!(out.contains(r#"<span class="syntax-selector">a::before</span>"#));
        assert!(out.contains(r#"<span class="syntax-string">&quot;x;}&quot;</span>"#));
        // The brace inside the string must not close the rule.
        assert!(out.ends_with(r#" <span class="syntax-punctuation">}</span>"#));
    }

    #[test]
    fn test_css_at_rule_then_selector_params() {
        let out = highlight_css("@media screen { a { color: blue } }");
        assert!(out.starts_with(r#"<span class="syntax-at-rule">@media</span> "#));
        assert!(out.contains(r#"<span class="syntax-selector">screen</span>"#));
        assert!(out.contains(r#"<span class="syntax-value">blue</span>"#));
    }

    #[test]
    fn test_css_at_rule_statement() {
        let out = highlight_css("@import url(a.css);\nb{}");
        assert!(out.contains(r#"<span class="syntax-at-rule">@import</span>"#));
        assert!(out.contains(r#"<span class="syntax-punctuation">(</span>"#));
        assert!(out.contains(r#"<span class="syntax-punctuation">;</span>"#));
        // Top-level `;` returns to selector context.
        assert!(out.contains(r#"<span class="syntax-selector">b</span>"#));
    }

    #[test]
    fn test_css_comma_and_parens_are_punctuation() {
        let out = highlight_css("h1, h2 { color: rgb(1,2,3) }");
        assert!(out.contains(r#"<span class="syntax-selector">h1</span><span class="syntax-punctuation">,</span>"#));
        assert!(out.contains(r#"<span class="syntax-value">rgb</span><span class="syntax-punctuation">(</span>"#));
        assert!(out.contains(r#"<span class="syntax-value">2</span>"#));
    }

    #[test]
    fn test_css_whitespace_preserved_unclassified() {
        let out = highlight_css("a  {\n\tb: c;\n}");
        assert!(out.contains("</span>  <span"));
        assert!(out.contains("</span>\n\t<span"));
    }

    #[test]
    fn test_css_unbalanced_close_brace_does_not_underflow() {
        let out = highlight_css("} a { b: c }");
        assert!(out.contains(r#"<span class="syntax-property">b</span>"#));
    }

    #[test]
    fn test_css_escapes_child_combinator() {
        let out = highlight_css("ul > li {}");
        assert!(out.contains(r#"<span class="syntax-selector">&gt;</span>"#));
    }
