use crate::forms::validators;

#[test]
fn test_username_accepts_allowed_characters() {
    assert!(validators::username("alice").is_ok());
    assert!(validators::username("a.l+i-c_e@home").is_ok());
    assert!(validators::username("Zoë").is_ok());
}

#[test]
fn test_username_rejects_spaces_and_symbols() {
    assert!(validators::username("").is_err());
    assert!(validators::username("al ice").is_err());
    assert!(validators::username("alice!").is_err());
    assert!(validators::username(&"a".repeat(151)).is_err());
}

#[test]
fn test_email_validation() {
    assert!(validators::email("").is_ok());
    assert!(validators::email("a@b.com").is_ok());
    assert!(validators::email("first.last+tag@mail.example.org").is_ok());

    assert!(validators::email("plain").is_err());
    assert!(validators::email("@b.com").is_err());
    assert!(validators::email("a@b").is_err());
    assert!(validators::email("a@@b.com").is_err());
    assert!(validators::email("a@b..com").is_err());
    assert!(validators::email("a b@c.com").is_err());
    assert!(validators::email("a@-b.com").is_err());
    assert!(validators::email("a@localhost").is_err());
    assert!(validators::email("a.@b.com\n").is_err());
}

#[test]
fn test_phone_number_validation() {
    assert!(validators::phone_number("", 20).is_ok());
    assert!(validators::phone_number("+20 100 123 4567", 20).is_ok());
    assert!(validators::phone_number("(020) 7946-0018", 20).is_ok());

    assert!(validators::phone_number("12345", 20).is_err());
    assert!(validators::phone_number("555-CALL-NOW", 20).is_err());
    assert!(validators::phone_number("12+3456789", 20).is_err());
    assert!(validators::phone_number("123456789012345678901", 20).is_err());
}

#[test]
fn test_max_length_counts_characters() {
    assert!(validators::max_length("ééé", 3).is_ok());
    assert_eq!(
        validators::max_length("abcd", 3).unwrap_err(),
        "Ensure this value has at most 3 characters (it has 4)."
    );
}
