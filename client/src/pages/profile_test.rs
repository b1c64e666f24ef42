use super::*;

#[test]
fn verification_label_reflects_flag() {
    assert_eq!(verification_label(true), "Verified");
    assert_eq!(verification_label(false), "Not verified");
}
