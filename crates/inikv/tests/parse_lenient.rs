use inikv::decode::parser::Parser;
use inikv::{LineEnding, WriteOptions, parse};

#[test]
fn skips_item_before_section_and_later_duplicates() {
    let doc = parse("a=1\r\n[S]\r\nx=1\r\nx=2\r\n");
    assert_eq!(doc.len(), 1);
    let items = doc.get("S").unwrap().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items.get("x"), Some("1"));
}

#[test]
fn comments_and_blank_lines_ignored() {
    let doc = parse("; leading comment\n\n   ; indented comment\n[S]\n\t\nk = v\n");
    assert_eq!(doc.value("S", "k"), Some("v"));
    assert_eq!(doc.get("S").unwrap().items().len(), 1);
}

#[test]
fn malformed_lines_skipped() {
    let input = "\
[Good]
no equals sign here
[Unclosed
[Bad]Name]
[]
=missing name
[name=1
bad\u{1}=x
k=bad\u{1}value
k=ok
";
    let doc = parse(input);
    assert_eq!(doc.names().collect::<Vec<_>>(), ["Good"]);
    let items = doc.get("Good").unwrap().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items.get("k"), Some("ok"));
}

#[test]
fn duplicate_section_skipped_items_go_to_first() {
    // The duplicate header is dropped, so following items keep attaching
    // to the most recently added section.
    let doc = parse("[A]\na=1\n[B]\nb=1\n[A]\nc=1\n");
    assert_eq!(doc.names().collect::<Vec<_>>(), ["A", "B"]);
    assert_eq!(doc.value("B", "c"), Some("1"));
    assert_eq!(doc.get("A").unwrap().items().len(), 1);
}

#[test]
fn section_names_and_items_normalized() {
    let doc = parse("  [  Spaced Name  ]  \n  key  =   value with trailing   \n");
    let section = doc.get("Spaced Name").unwrap();
    assert_eq!(section.name(), "Spaced Name");
    assert_eq!(section.items().get("key"), Some("value with trailing   "));
}

#[test]
fn value_split_on_first_equals() {
    let doc = parse("[S]\nurl=http://x/?a=b&c=d\n");
    assert_eq!(doc.value("S", "url"), Some("http://x/?a=b&c=d"));
}

#[test]
fn section_name_may_contain_equals() {
    let doc = parse("[a=b]\nk=v\n");
    assert_eq!(doc.value("a=b", "k"), Some("v"));
}

#[test]
fn all_line_terminators_accepted() {
    let doc = parse("[S]\ra=1\nb=2\r\nc=3");
    let items = doc.get("S").unwrap().items();
    assert_eq!(items.names().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn empty_input_gives_empty_document() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n; nothing\n").is_empty());
}

#[test]
fn output_is_normalized() {
    let doc = parse("[S]\n  k =  v\n;c\nj=\n");
    let text = doc.to_string_with(&WriteOptions {
        line_ending: LineEnding::Lf,
    });
    assert_eq!(text, "[S]\nk=v\nj=");
}

#[test]
fn parser_from_input_defaults_to_lenient() -> Result<(), Box<dyn std::error::Error>> {
    let input = "orphan=1\n[S]\nk=v\nk=again\n";
    let doc = Parser::from_input(input).parse_document()?;
    assert_eq!(doc, parse(input));
    assert_eq!(doc.value("S", "k"), Some("v"));
    Ok(())
}
