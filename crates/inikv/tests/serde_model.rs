#![cfg(feature = "serde")]
use inikv::{Item, SectionCollection, parse};
use serde_json::json;

#[test]
fn document_serializes_as_ordered_maps() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse("[Z]\nb=2\na=1\n[A]\n");
    let v = serde_json::to_value(&doc)?;
    assert_eq!(v, json!({"Z": {"b": "2", "a": "1"}, "A": {}}));

    let s = serde_json::to_string(&doc)?;
    assert_eq!(s, r#"{"Z":{"b":"2","a":"1"},"A":{}}"#);
    Ok(())
}

#[test]
fn item_and_section_serialize_as_structs() -> Result<(), Box<dyn std::error::Error>> {
    let item = Item::new("k", "v ")?;
    assert_eq!(serde_json::to_value(&item)?, json!({"name": "k", "value": "v "}));

    let mut doc = SectionCollection::new();
    doc.set_value("S", "k", "v")?;
    let section = doc.get("S").ok_or("missing section")?;
    assert_eq!(
        serde_json::to_value(section)?,
        json!({"name": "S", "items": {"k": "v"}})
    );
    Ok(())
}
