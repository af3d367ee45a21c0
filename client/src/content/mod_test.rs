use super::*;

#[test]
fn bundled_fixture_parses() {
    assert!(parse_how_it_works(HOW_IT_WORKS_JSON).is_ok());
}

#[test]
fn bundled_fixture_has_four_ordered_steps() {
    let content = how_it_works();
    let numbers: Vec<u32> = content.steps.iter().map(|s| s.step).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert!(!content.title.is_empty());
}

#[test]
fn bundled_fixture_uses_known_icon_keys() {
    let icons: Vec<&str> = how_it_works().steps.iter().map(|s| s.icon.as_str()).collect();
    assert_eq!(icons, vec!["user-check", "search", "shopping-cart", "truck"]);
}

#[test]
fn parse_sorts_steps_by_number() {
    let raw = r#"{"title":"t","subtitle":"s","steps":[
        {"step":2,"title":"b","description":"","icon":"search"},
        {"step":1,"title":"a","description":"","icon":"truck"}
    ]}"#;
    let content = parse_how_it_works(raw).unwrap();
    assert_eq!(content.steps[0].title, "a");
    assert_eq!(content.steps[1].title, "b");
}

#[test]
fn parse_keeps_unknown_icon_keys() {
    let raw = r#"{"title":"t","subtitle":"s","steps":[{"step":1,"title":"a","description":"","icon":"rocket"}]}"#;
    assert_eq!(parse_how_it_works(raw).unwrap().steps[0].icon, "rocket");
}

#[test]
fn parse_rejects_wrong_shape() {
    assert!(parse_how_it_works(r#"{"steps":"nope"}"#).is_err());
}
