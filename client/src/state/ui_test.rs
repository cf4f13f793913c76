use super::*;

#[test]
fn default_button_is_idle_and_enabled() {
    let button = SubmitButton::default();
    assert_eq!(button.label, IDLE_LABEL);
    assert!(!button.disabled);
    assert!(!button.is_busy());
}

#[test]
fn busy_button_is_disabled_with_busy_label() {
    let button = SubmitButton::busy();
    assert_eq!(button.label, "Analyzing...");
    assert!(button.disabled);
    assert!(button.is_busy());
}

#[test]
fn disabled_button_with_other_label_is_not_busy() {
    let button = SubmitButton { label: "Wait".into(), disabled: true };
    assert!(!button.is_busy());
}
