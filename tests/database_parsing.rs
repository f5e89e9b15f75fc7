//! Integration tests for topic grouping, the context index and ToC selection
//!
//! Every test checks the resulting database through assert_database rather than by counting.

use qhelp::qhelp::config::ParsingConfig;
use qhelp::qhelp::parsing::{parse_database, parse_database_with};
use qhelp::qhelp::testing::assert_database;
use qhelp::ParseError;
use rstest::rstest;

const KEYS_DB: &str = "\
.context h.contents
.topic Table of Contents
.freeze 2
\\aKeyboard\\vh.keys\\v
.context h.keys
.context @k100
.context k12
.category Reference
.topic Keyboard
Press F1 for help.
.end
.context @local12
.context @l2
Local topic.
";

#[test]
fn test_multi_context_topics() {
    let db = parse_database(KEYS_DB).unwrap();

    assert_database(&db)
        .topic_count(3)
        .topic(0, |t| {
            t.contexts(&["h.contents"])
                .title(Some("Table of Contents"))
                .category(None)
                .body("\\aKeyboard\\vh.keys\\v\n")
                .name("Table of Contents")
                .filename("index.html")
                .aliases(&["h_dot_contents.html"])
                .is_toc();
        })
        .topic(1, |t| {
            t.contexts(&["h.keys", "@k100", "k12"])
                .title(Some("Keyboard"))
                .category(Some("Reference"))
                .body("Press F1 for help.\n")
                .body_contains("F1")
                .filename("h_dot_keys.html")
                .aliases(&["x_at_k100.html", "k12.html"])
                .not_toc();
        })
        .topic(2, |t| {
            t.contexts(&["@local12", "@l2"])
                .title(None)
                .name("@l2")
                .filename("x_at_l2.html")
                .aliases(&["x_at_local12.html"])
                .not_toc();
        })
        .resolves("h.contents", 0)
        .resolves("@k100", 1)
        .resolves("@l2", 2)
        .unresolved("h.missing")
        .toc(Some(0));
}

#[rstest]
#[case::single(1)]
#[case::pair(2)]
#[case::many(7)]
fn test_consecutive_contexts_make_one_topic(#[case] n: usize) {
    let source: String = (0..n).map(|i| format!(".context c{i}\n")).collect::<String>() + "body\n";
    let db = parse_database(&source).unwrap();

    let expected: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
    assert_database(&db).topic_count(1).topic(0, |t| {
        t.contexts(&expected).body("body\n");
    });
}

#[rstest]
#[case::body_line(".context a\ntext\n.context b\n")]
#[case::blank_line(".context a\n\n.context b\n")]
#[case::ignored_directive(".context a\n.popup\n.context b\n")]
#[case::title(".context a\n.topic A\n.context b\n")]
#[case::category(".context a\n.category x\n.context b\n")]
fn test_any_other_line_splits_topics(#[case] source: &str) {
    let db = parse_database(source).unwrap();
    assert_database(&db)
        .topic_count(2)
        .topic(0, |t| {
            t.contexts(&["a"]);
        })
        .topic(1, |t| {
            t.contexts(&["b"]);
        });
}

#[test]
fn test_redeclared_context_belongs_to_later_topic() {
    let db = parse_database(".context shared\n.context first\none\n.context shared\ntwo\n").unwrap();
    assert_database(&db)
        .topic(0, |t| {
            t.contexts(&["shared", "first"]);
        })
        .topic(1, |t| {
            t.contexts(&["shared"]);
        })
        .resolves("shared", 1)
        .resolves("first", 0);
}

#[test]
fn test_no_toc_is_not_an_error() {
    let db = parse_database(".context a\nx\n.context b\ny\n").unwrap();
    assert_database(&db)
        .toc(None)
        .topic(0, |t| {
            t.filename("a.html").aliases(&[]);
        });
}

#[test]
fn test_first_contents_context_wins() {
    let db = parse_database(".context intro\n.context a.contents\nx\n.context b.contents\ny\n")
        .unwrap();
    assert_database(&db).toc(Some(0)).topic(1, |t| {
        t.filename("b_dot_contents.html").not_toc();
    });
}

#[test]
fn test_redeclared_toc_context_moves_toc() {
    let db = parse_database(".context x.contents\na\n.context y.contents\nb\n.context x.contents\nc\n")
        .unwrap();
    assert_database(&db)
        .resolves("x.contents", 2)
        .toc(Some(2))
        .topic(1, |t| {
            t.filename("y_dot_contents.html").not_toc();
        })
        .topic(2, |t| {
            t.filename("index.html").body("c\n");
        });
}

#[test]
fn test_custom_toc_marker() {
    let config = ParsingConfig {
        toc_marker: "start".to_string(),
    };
    let db = parse_database_with(".context h.contents\nx\n.context h.start\ny\n", &config).unwrap();
    assert_database(&db).toc(Some(1));
}

#[rstest]
#[case::unknown(".context a\nok\n.definitely\n", "definitely", 3)]
#[case::near_miss(".contexts a\n", "contexts", 1)]
#[case::before_first_topic(".bogus\n.context a\n", "bogus", 1)]
fn test_unknown_directive_fails(#[case] source: &str, #[case] name: &str, #[case] line: usize) {
    let err = parse_database(source).unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedDirective {
            directive: name.to_string(),
            line,
        }
    );
}

#[test]
fn test_blank_context_argument_still_opens_topic() {
    let db = parse_database(".context   \nbody\n.context b\n.topic\u{A0}Foo\n").unwrap();
    assert_database(&db)
        .topic_count(2)
        .topic(0, |t| {
            t.contexts(&[""]).body("body\n");
        })
        .topic(1, |t| {
            t.contexts(&["b"]).title(None).name("b");
        })
        .resolves("", 0);
}

#[test]
fn test_crlf_source() {
    let db = parse_database(".context a\r\n.topic A\r\nline one\r\nline two\r\n").unwrap();
    assert_database(&db).topic(0, |t| {
        t.title(Some("A")).body("line one\nline two\n");
    });
}

#[test]
fn test_uppercase_dot_lines_are_body_text() {
    let db = parse_database(".context a\n.NOTE this is text\n").unwrap();
    assert_database(&db).topic(0, |t| {
        t.body(".NOTE this is text\n");
    });
}
