use mapobject_core::{map_object, map_typed, key_name, KeyName, Record, RecordMapper};
use serde::Serialize;
use serde_json::{json, Value};

key_name!(UserId => "userId"; GroupId => "groupId");

fn object(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

#[test]
fn default_key_name_matches_explicit_key() {
    let input = object(json!({ "item1": { "value": 100 }, "item2": { "value": 200 } }));
    let implicit = serde_json::to_value(map_object(&input, None)).unwrap();
    let explicit = serde_json::to_value(map_object(&input, Some("key"))).unwrap();
    assert_eq!(implicit, explicit);
    assert_eq!(implicit, json!([{ "key": "item1", "value": 100 }, { "key": "item2", "value": 200 }]));
}

#[test]
fn nested_fields_are_shared_by_reference() {
    let input = object(json!({
        "user1": { "name": "John", "details": { "address": "123 Main St", "phone": "555-1234" } },
        "user2": { "name": "Jane", "details": { "address": "456 Oak Ave", "phone": "555-5678" } }
    }));
    let out = map_object(&input, Some(UserId::NAME));
    assert_eq!(out.len(), input.len());
    for (view, (key, record)) in out.iter().zip(input.iter()) {
        assert_eq!(view.key(), key);
        assert_eq!(view.get("userId"), Some(&json!(key)));
        let original = record.get("details").unwrap();
        assert!(std::ptr::eq(view.shared("details").unwrap(), original));
        assert_eq!(view.get("name"), record.get("name"));
    }
}

#[test]
fn array_values_pass_through() {
    let input = json!({
        "group1": { "title": "Team A", "members": ["John", "Jane", "Bob"] },
        "group2": { "title": "Team B", "members": ["Alice", "Charlie"] }
    });
    let mapper = RecordMapper::with_key_name(GroupId::NAME);
    let out = mapper.map_value(&input).unwrap();
    assert!(std::ptr::eq(out[1].shared("members").unwrap(), &input["group2"]["members"]));
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([
            { "groupId": "group1", "title": "Team A", "members": ["John", "Jane", "Bob"] },
            { "groupId": "group2", "title": "Team B", "members": ["Alice", "Charlie"] }
        ])
    );
}

#[test]
fn input_is_left_untouched() {
    let input = object(json!({ "a": { "key": "mine", "x": 1 } }));
    let before = input.clone();
    let out = map_object(&input, None);
    assert_eq!(out[0].get("key"), Some(&json!("a")));
    drop(out);
    assert_eq!(input, before);
}

#[test]
fn enumeration_order_is_preserved() {
    let input = object(json!({ "zeta": {}, "alpha": {}, "mid": {}, "10": {}, "2": {} }));
    let keys: Vec<&str> = map_object(&input, None).iter().map(|v| v.key()).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid", "10", "2"]);

    let sorted: std::collections::BTreeMap<&str, Record> = input.iter().map(|(k, v)| (k.as_str(), object(v.clone()))).collect();
    let typed_keys: Vec<&str> = map_typed::<UserId, _, _>(&sorted).iter().map(|k| k.key()).collect();
    assert_eq!(typed_keys, vec!["10", "2", "alpha", "mid", "zeta"]);
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Preferences {
    theme: String,
    notifications: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    last_login: String,
    preferences: Preferences,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComplexUserData {
    name: String,
    is_active: bool,
    metadata: Metadata,
    tags: Vec<String>,
}

fn user(name: &str, active: bool, login: &str, theme: &str, notify: bool, tags: &[&str]) -> ComplexUserData {
    ComplexUserData {
        name: name.into(),
        is_active: active,
        metadata: Metadata {
            last_login: login.into(),
            preferences: Preferences { theme: theme.into(), notifications: notify },
        },
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn complex_typed_records() {
    let mut users = mapobject_core::RecordMap::new();
    users.insert("user-123".to_string(), user("John Doe", true, "2023-03-15", "dark", true, &["admin", "developer"]));
    users.insert("user-456".to_string(), user("Jane Smith", false, "2023-03-10", "light", false, &["editor", "designer"]));

    let out = map_typed::<UserId, _, _>(&users);
    assert_eq!(out[0].key(), "user-123");
    assert_eq!(out[1].key(), "user-456");
    assert!(out[0].is_active);
    assert_eq!(out[1].metadata.preferences.theme, "light");

    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([
            {
                "userId": "user-123",
                "name": "John Doe",
                "isActive": true,
                "metadata": { "lastLogin": "2023-03-15", "preferences": { "theme": "dark", "notifications": true } },
                "tags": ["admin", "developer"]
            },
            {
                "userId": "user-456",
                "name": "Jane Smith",
                "isActive": false,
                "metadata": { "lastLogin": "2023-03-10", "preferences": { "theme": "light", "notifications": false } },
                "tags": ["editor", "designer"]
            }
        ])
    );
}
