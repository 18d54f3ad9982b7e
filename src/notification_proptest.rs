//! Property-based tests for notification formatting

#[cfg(test)]
mod tests {
    use crate::notification::*;
    use crate::user::UserRecord;
    use proptest::prelude::*;

    fn any_locale() -> impl Strategy<Value = Locale> {
        prop_oneof![Just(Locale::En), Just(Locale::Es)]
    }

    proptest! {
        #[test]
        fn test_name_interpolated_verbatim(name in ".+") {
            let line = send_notification(Some(&UserRecord::named(name.clone()))).unwrap();
            prop_assert_eq!(line, format!("📩 Notification sent to {name}"));
        }

        #[test]
        fn test_every_locale_rejects_missing_user(locale in any_locale()) {
            let notifier = Notifier::new(locale);
            let err = notifier.send(None).unwrap_err();
            prop_assert!(err.is_invalid_argument());
            prop_assert_eq!(err.to_string(), locale.invalid_user_message());
        }

        #[test]
        fn test_json_arrays_are_rejected(names in prop::collection::vec("[a-zA-Z]{1,12}", 0..4)) {
            let json = serde_json::to_string(&names).unwrap();
            let err = send_notification_json(&json).unwrap_err();
            prop_assert!(err.is_invalid_argument());
        }

        #[test]
        fn test_json_documents_never_panic(json in ".*") {
            // Any input either formats or fails with InvalidArgument
            match send_notification_json(&json) {
                Ok(line) => prop_assert!(line.starts_with("📩 ")),
                Err(err) => prop_assert!(err.is_invalid_argument()),
            }
        }
    }
}
