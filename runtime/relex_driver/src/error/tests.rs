use crate::error::{error_display, DriverError, MatchError, RecognitionError};
use crate::mode::Mode;
use pretty_assertions::assert_eq;

#[test]
fn error_display_escapes_layout_characters() {
    assert_eq!(error_display("a\nb"), "a\\nb");
    assert_eq!(error_display("\t\r"), "\\t\\r");
    assert_eq!(error_display("plain"), "plain");
    assert_eq!(error_display(""), "");
}

#[test]
fn recognition_messages() {
    let nva = RecognitionError::NoViableAlt {
        start_index: 4,
        mode: Mode::DEFAULT,
    };
    assert_eq!(nva.to_string(), "no viable alternative at index 4");

    let aborted = RecognitionError::RuleAborted {
        rule_index: 7,
        index: 12,
    };
    assert_eq!(aborted.to_string(), "rule 7 aborted at index 12");
}

#[test]
fn match_error_is_transparent_for_recognition() {
    let failure = RecognitionError::NoViableAlt {
        start_index: 0,
        mode: Mode::DEFAULT,
    };
    let wrapped = MatchError::from(failure.clone());
    assert_eq!(wrapped.to_string(), failure.to_string());
}

#[test]
fn driver_error_carries_the_internal_source() {
    let inner: Box<dyn std::error::Error + Send + Sync> = "backing store gone".into();
    let err = DriverError::Interpreter(inner);
    assert_eq!(err.to_string(), "pattern interpreter failed: backing store gone");
    assert!(std::error::Error::source(&err).is_some());
}
