    use super::*;

    fn opts(format: Format) -> HighlightOptions {
        HighlightOptions { format }
    }

    #[test]
    fn test_highlight_text_is_plain_escape() {
        let out = highlight_syntax("<b>\"x\" & 'y'</b>", &opts(Format::Text));
        assert_eq!(out, "&lt;b&gt;&quot;x&quot; &amp; &#039;y&#039;&lt;/b&gt;");
    }

    #[test]
    fn test_highlight_markdown_is_plain_escape() {
        let out = highlight_syntax("# Title <x>", &opts(Format::Markdown));
        assert_eq!(out, "# Title &lt;x&gt;");
        assert!(!out.contains("<span"));
    }

    #[test]
    fn test_highlight_dispatches_by_format() {
        assert!(highlight_syntax("{\"a\": 1}", &opts(Format::Json)).contains("syntax-key"));
        assert!(highlight_syntax("a: 1", &opts(Format::Yaml)).contains("syntax-key"));
        assert!(highlight_syntax("a{color:red}", &opts(Format::Css)).contains("syntax-property"));
        assert!(highlight_syntax("let x", &opts(Format::JavaScript)).contains("syntax-keyword"));
        assert!(highlight_syntax("<p>", &opts(Format::Html)).contains("syntax-tag"));
    }

    #[test]
    fn test_format_from_name_aliases() {
        assert_eq!(Format::from_name("JSON"), Format::Json);
        assert_eq!(Format::from_name("yml"), Format::Yaml);
        assert_eq!(Format::from_name("js"), Format::JavaScript);
        assert_eq!(Format::from_name(" JavaScript "), Format::JavaScript);
        assert_eq!(Format::from_name("md"), Format::Markdown);
        assert_eq!(Format::from_name("htm"), Format::Html);
    }

    #[test]
    fn test_format_unknown_name_falls_back_to_text() {
        assert_eq!(Format::from_name("cobol"), Format::Text);
        assert_eq!(Format::from_name(""), Format::Text);
    }

    #[test]
    fn test_format_name_round_trips() {
        for format in [
            Format::Json,
            Format::Yaml,
            Format::Text,
            Format::Markdown,
            Format::Html,
            Format::Css,
            Format::JavaScript,
        ] {
            assert_eq!(Format::from_name(format.name()), format);
        }
    }

    #[test]
    fn test_options_deserialize_from_json() {
        let options: HighlightOptions =
            serde_json::from_str(r#"{"format": "css"}"#).expect("valid options");
        assert_eq!(options.format, Format::Css);

        let options: HighlightOptions = serde_json::from_str("{}").expect("defaults");
        assert_eq!(options.format, Format::Text);

        let options: HighlightOptions =
            serde_json::from_str(r#"{"format": "brainfuck"}"#).expect("fallback");
        assert_eq!(options.format, Format::Text);
    }

    #[test]
    fn test_syntax_class_vocabulary() {
        let names: Vec<&str> = SyntaxClass::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), 18);
        assert!(names.iter().all(|n| n.starts_with("syntax-")));
        assert!(names.contains(&"syntax-at-rule"));
        assert!(names.contains(&"syntax-punctuation"));
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len(), "class names must be distinct");
    }

    #[test]
    fn test_markup_skips_empty_spans() {
        let mut m = Markup::with_capacity(0);
        m.span(SyntaxClass::Key, "");
        m.span(SyntaxClass::Key, "<k>");
        m.text(" & ");
        assert_eq!(
            m.finish(),
            "<span class=\"syntax-key\">&lt;k&gt;</span> &amp; "
        );
    }
