use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::error::RecognitionError;
use crate::listener::{ErrorListener, ListenerDispatch, SyntaxError};
use crate::mode::Mode;

struct Recording {
    id: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl ErrorListener for Recording {
    fn syntax_error(&mut self, error: &SyntaxError<'_>) {
        self.log
            .borrow_mut()
            .push(format!("{}: line {}:{} {}", self.id, error.line, error.column, error.message));
    }
}

fn sample_failure() -> RecognitionError {
    RecognitionError::NoViableAlt {
        start_index: 0,
        mode: Mode::DEFAULT,
    }
}

fn notify(dispatch: &mut ListenerDispatch, failure: &RecognitionError) {
    let error = SyntaxError {
        source_name: "<string>",
        offending_token: None,
        line: 1,
        column: 0,
        message: "token recognition error at: 'x'",
        failure,
    };
    dispatch.syntax_error(&error);
}

#[test]
fn fresh_dispatch_has_one_console_listener() {
    let dispatch = ListenerDispatch::new();
    assert_eq!(dispatch.len(), 1);
    assert!(!dispatch.is_empty());
}

#[test]
fn empty_dispatch_has_none() {
    let dispatch = ListenerDispatch::empty();
    assert!(dispatch.is_empty());
}

#[test]
fn fan_out_preserves_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatch = ListenerDispatch::empty();
    dispatch.add(Box::new(Recording {
        id: "first",
        log: Rc::clone(&log),
    }));
    dispatch.add(Box::new(Recording {
        id: "second",
        log: Rc::clone(&log),
    }));

    let failure = sample_failure();
    notify(&mut dispatch, &failure);

    let entries = log.borrow();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].starts_with("first:"));
    assert!(entries[1].starts_with("second:"));
}

#[test]
fn remove_all_silences_dispatch() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatch = ListenerDispatch::new();
    dispatch.remove_all();
    dispatch.add(Box::new(Recording {
        id: "only",
        log: Rc::clone(&log),
    }));
    dispatch.remove_all();
    assert!(dispatch.is_empty());

    let failure = sample_failure();
    notify(&mut dispatch, &failure);
    assert!(log.borrow().is_empty());
}
