//! Decoding a tagged union: the `type` member picks the decoder for the rest.

use jsoncomb::decode::{fail, field, int, map, map4, nullable, string};
use jsoncomb::{decode, Decoder, Error};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum User {
    Guest {
        display_name: String,
    },
    Registered {
        id: i64,
        alias: String,
        email: String,
        phone: Option<String>,
    },
}

fn user() -> Decoder<User> {
    field("type", string()).and_then(|tag| match tag.as_str() {
        "guest" => map(field("displayName", string()), |display_name| User::Guest {
            display_name,
        }),
        "registered" => map4(
            field("id", int()),
            field("alias", string()),
            field("email", string()),
            field("phone", nullable(string())),
            |id, alias, email, phone| User::Registered {
                id,
                alias,
                email,
                phone,
            },
        ),
        other => fail(format!("Unknown user type '{other}'")),
    })
}

#[rstest]
fn guest() {
    assert_eq!(
        decode(r#"{"type":"guest","displayName":"Guest123"}"#, &user()),
        Ok(User::Guest {
            display_name: "Guest123".to_string()
        })
    );
}

#[rstest]
fn registered_with_phone() {
    let text = r#"{
        "type": "registered",
        "id": 17,
        "alias": "ada",
        "email": "ada@example.org",
        "phone": "+46 70 000 00 00"
    }"#;
    assert_eq!(
        decode(text, &user()),
        Ok(User::Registered {
            id: 17,
            alias: "ada".to_string(),
            email: "ada@example.org".to_string(),
            phone: Some("+46 70 000 00 00".to_string()),
        })
    );
}

#[rstest]
fn registered_with_null_phone() {
    let text = r#"{"type":"registered","id":42,"alias":"mrsmith","email":"mrsmith@example.com","phone":null}"#;
    assert_eq!(
        decode(text, &user()),
        Ok(User::Registered {
            id: 42,
            alias: "mrsmith".to_string(),
            email: "mrsmith@example.com".to_string(),
            phone: None,
        })
    );
}

#[rstest]
#[case(r#"{"displayName": "x"}"#, "Field 'type' not found")]
#[case(r#"{"type": "admin"}"#, "Unknown user type 'admin'")]
#[case(r#"{"type": "guest"}"#, "Field 'displayName' not found")]
#[case(r#"{"type": "registered", "id": 1.5, "alias": "a", "email": "e", "phone": null}"#, "1.5 is not an integer")]
#[case(r#"{"type": "registered", "id": 1, "alias": "a", "email": "e"}"#, "Field 'phone' not found")]
fn failures(#[case] input: &str, #[case] message: &str) {
    assert_eq!(decode(input, &user()), Err(Error::decode(message)));
}

#[rstest]
fn lists_of_users() {
    let text = r#"[
        {"type": "guest", "displayName": "a"},
        {"type": "registered", "id": 1, "alias": "b", "email": "c", "phone": null}
    ]"#;
    let users = decode(text, &jsoncomb::decode::list(user())).unwrap();
    assert_eq!(users.len(), 2);
    assert!(matches!(users[0], User::Guest { .. }));
    assert!(matches!(users[1], User::Registered { phone: None, .. }));
}
