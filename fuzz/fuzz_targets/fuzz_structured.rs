#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Set(String, String, String),
    Add(String, String, String),
    Remove(String),
    RemoveItem(String, String),
    GetOrInsert(String),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut doc = inikv::SectionCollection::new();
    for op in ops {
        match op {
            Op::Set(section, name, value) => {
                let _ = doc.set_value(&section, &name, &value);
            }
            Op::Add(section, name, value) => {
                if let Ok(items) = doc.get_or_insert(&section) {
                    let _ = items.add(&name, &value);
                }
            }
            Op::Remove(section) => {
                doc.remove(&section);
            }
            Op::RemoveItem(section, name) => {
                if let Some(s) = doc.get_mut(&section) {
                    s.items_mut().remove(&name);
                }
            }
            Op::GetOrInsert(section) => {
                let _ = doc.get_or_insert(&section);
            }
        }
    }
    let text = doc.to_string();
    let reparsed = inikv::parse_strict(&text).expect("API-built documents always reparse");
    assert_eq!(reparsed, doc);
});
