//! Notification value object tests

use autosave_domain::Notification;

#[test]
fn test_notification_for_key() {
    let notification = Notification::new("Draft recovered", "Restored").for_key("draft1");
    assert_eq!(notification.title, "Draft recovered");
    assert_eq!(notification.description, "Restored");
    assert_eq!(notification.key.as_deref(), Some("draft1"));
}

#[test]
fn test_notification_without_key() {
    let notification = Notification::new("Title", "Body");
    assert!(notification.key.is_none());
}
