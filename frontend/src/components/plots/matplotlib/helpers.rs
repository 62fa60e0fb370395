//! Side effects of the plot widget, kept free of DOM types so they can be
//! exercised outside the browser.

use std::fmt::Debug;

use yew::Callback;

/// Text shown when the widget has nothing to display.
pub const NO_DATA_MESSAGE: &str = "No plot data available";

/// Accessible description of the rendered plot image.
pub const PLOT_ALT_TEXT: &str = "Matplotlib Plot";

/// Reports a failed image load.
///
/// Writes one error-level log entry carrying the event, then hands the same
/// event to `on_error` when the caller supplied one. The failed `<img>` is left
/// in place; any recovery is up to the caller.
pub fn report_load_failure<E: Debug>(event: E, on_error: Option<&Callback<E>>) {
    log::error!("Error loading Matplotlib plot: {:?}", event);
    if let Some(on_error) = on_error {
        on_error.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use log::Level;

    use crate::test_support::{entries_for, install_logger};

    #[test]
    fn failure_is_logged_and_forwarded_once() {
        install_logger();
        let received = Rc::new(RefCell::new(Vec::new()));
        let on_error = {
            let received = received.clone();
            Callback::from(move |event: String| received.borrow_mut().push(event))
        };

        report_load_failure("load-failed-forwarded".to_string(), Some(&on_error));

        assert_eq!(*received.borrow(), vec!["load-failed-forwarded".to_string()]);
        let entries = entries_for("load-failed-forwarded");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, Level::Error);
        assert!(entries[0].1.starts_with("Error loading Matplotlib plot"));
    }

    #[test]
    fn failure_without_callback_is_only_logged() {
        install_logger();

        report_load_failure("load-failed-unhandled".to_string(), None);

        assert_eq!(entries_for("load-failed-unhandled").len(), 1);
    }
}
