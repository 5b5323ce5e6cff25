use super::*;

#[test]
fn notifier_starts_hidden() {
    let n = Notifier::default();
    assert!(n.visible().is_none());
    assert!(n.last().is_none());
}

#[test]
fn show_makes_banner_visible() {
    let mut n = Notifier::default();
    n.show(NoticeKind::Success, "ok");
    let notice = n.visible().unwrap();
    assert_eq!(notice.text, "ok");
    assert_eq!(notice.kind.class(), "success");
}

#[test]
fn expire_with_current_ticket_hides_but_keeps_text() {
    let mut n = Notifier::default();
    let t = n.show(NoticeKind::Error, "nope");
    assert!(n.expire(t));
    assert!(n.visible().is_none());
    assert_eq!(n.last().unwrap().text, "nope");
    assert!(!n.expire(t));
}

#[test]
fn stale_ticket_does_not_hide_newer_banner() {
    let mut n = Notifier::default();
    let first = n.show(NoticeKind::Success, "first");
    let second = n.show(NoticeKind::Error, "second");
    assert!(!n.expire(first));
    assert_eq!(n.visible().unwrap().text, "second");
    assert!(n.expire(second));
}

#[test]
fn kind_classes() {
    assert_eq!(NoticeKind::Success.class(), "success");
    assert_eq!(NoticeKind::Error.class(), "error");
}
