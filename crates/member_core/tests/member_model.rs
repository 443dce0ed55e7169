use member_core::Member;

#[test]
fn member_new_starts_without_id() {
    let member = Member::new("spring");

    assert_eq!(member.id, None);
    assert_eq!(member.name, "spring");
    assert!(!member.is_persisted());
}

#[test]
fn member_serialization_uses_expected_wire_fields() {
    let member = Member {
        id: Some(3),
        name: "alice".to_string(),
    };

    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "alice");

    let decoded: Member = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, member);
}

#[test]
fn unsaved_member_serializes_null_id() {
    let json = serde_json::to_value(Member::new("bob")).unwrap();
    assert!(json["id"].is_null());
}
