use std::str::FromStr;

use sqlname_core::QualifiedName;

#[test]
fn single_part_name_has_no_schema_or_database() {
    let parsed = QualifiedName::parse("proc");

    assert_eq!(parsed.name, "proc");
    assert_eq!(parsed.schema, None);
    assert_eq!(parsed.database, None);
}

#[test]
fn two_part_name_assigns_schema() {
    let parsed = QualifiedName::parse("dbo.proc");

    assert_eq!(parsed.database, None);
    assert_eq!(parsed.schema.as_deref(), Some("dbo"));
    assert_eq!(parsed.name, "proc");
}

#[test]
fn three_part_name_assigns_database() {
    let parsed = QualifiedName::parse("MyDb.dbo.proc");

    assert_eq!(
        parsed,
        QualifiedName::named("proc")
            .with_schema("dbo")
            .with_database("MyDb")
    );
}

#[test]
fn bracketed_database_keeps_its_inner_dot() {
    let parsed = QualifiedName::parse("[My.db].dbo.proc");

    assert_eq!(parsed.database.as_deref(), Some("My.db"));
    assert_eq!(parsed.schema.as_deref(), Some("dbo"));
    assert_eq!(parsed.name, "proc");
}

#[test]
fn leading_segments_beyond_three_are_discarded() {
    let parsed = QualifiedName::parse("a.b.c.d");

    assert_eq!(parsed.database.as_deref(), Some("b"));
    assert_eq!(parsed.schema.as_deref(), Some("c"));
    assert_eq!(parsed.name, "d");
}

#[test]
fn empty_and_whitespace_input_become_the_name() {
    assert_eq!(QualifiedName::parse(""), QualifiedName::named(""));
    assert_eq!(QualifiedName::parse("   "), QualifiedName::named("   "));
}

#[test]
fn omitted_schema_is_present_but_empty() {
    let parsed = QualifiedName::parse("MyDb..proc");

    assert_eq!(parsed.database.as_deref(), Some("MyDb"));
    assert_eq!(parsed.schema.as_deref(), Some(""));
    assert_eq!(parsed.name, "proc");
}

#[test]
fn from_parts_does_not_validate() {
    let built = QualifiedName::from_parts(Some(" ".to_string()), None, "");

    assert_eq!(built.database.as_deref(), Some(" "));
    assert_eq!(built.schema, None);
    assert_eq!(built.name, "");
}

#[test]
fn from_str_and_from_agree_with_parse() {
    let text = "[Sales].[dbo].[GetOrders]";
    let expected = QualifiedName::parse(text);

    let Ok(via_from_str) = QualifiedName::from_str(text);
    assert_eq!(via_from_str, expected);
    assert_eq!(QualifiedName::from(text), expected);
}

#[test]
fn display_renders_full_name() {
    let name = QualifiedName::named("proc").with_schema("dbo");

    assert_eq!(name.to_string(), "[dbo].[proc]");
    assert_eq!(name.full_name(), "[dbo].[proc]");
}

#[test]
fn reparsing_the_rendered_name_reproduces_the_triple() {
    let inputs = [
        "proc",
        "dbo.proc",
        "MyDb.dbo.proc",
        "[MyDb].[dbo].[proc]",
        "\"MyDb\".dbo.\"proc\"",
        "MyDb..proc",
        "x.MyDb.dbo.proc",
    ];

    for input in inputs {
        let parsed = QualifiedName::parse(input);
        let reparsed = QualifiedName::parse(&parsed.full_name());

        assert_eq!(reparsed, parsed, "round trip of {input:?}");
    }
}

#[test]
fn blank_schema_collapses_to_empty_after_render_and_reparse() {
    let parsed = QualifiedName::parse("D. .X");
    assert_eq!(parsed.schema.as_deref(), Some(" "));

    let rendered = parsed.full_name();
    assert_eq!(rendered, "[D]..[X]");

    let reparsed = QualifiedName::parse(&rendered);
    assert_eq!(reparsed.database.as_deref(), Some("D"));
    assert_eq!(reparsed.schema.as_deref(), Some(""));
    assert_eq!(reparsed.name, "X");
    assert_eq!(reparsed.full_name(), rendered);
}

#[test]
fn qualified_name_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QualifiedName>();
}
