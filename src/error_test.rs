use super::*;

#[test]
fn missing_element_names_role_and_selector() {
    let err = LightboxError::MissingElement { role: "overlay", selector: "#fullpage".to_owned() };
    assert_eq!(err.to_string(), "missing overlay element (selector `#fullpage`)");
}

#[test]
fn wrong_element_type_names_expected_interface() {
    let err = LightboxError::WrongElementType {
        role: "overlay image",
        selector: "#fullscreen-image".to_owned(),
        expected: "HTMLImageElement",
    };
    assert_eq!(
        err.to_string(),
        "overlay image element (selector `#fullscreen-image`) is not an HTMLImageElement"
    );
}

#[test]
fn invalid_selector_carries_browser_message() {
    let err = LightboxError::InvalidSelector { selector: "##".to_owned(), message: "not a valid selector".to_owned() };
    assert_eq!(err.to_string(), "invalid selector `##`: not a valid selector");
}

#[test]
fn config_error_wraps_serde_json() {
    let Err(json_err) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("truncated JSON should not parse");
    };
    let err = LightboxError::from(json_err);
    assert!(err.to_string().starts_with("invalid lightbox config: "));
}
