//! One-pass dispatch: pane first, clipboard fallback, distinct outcomes.
//!
//! The trait seams here are the IO boundary; the CLI crate provides the
//! tmux-, git- and clipboard-backed implementations, tests inject mocks.

use crate::config::Config;
use crate::error::AgsendError;
use crate::pane::PaneDescriptor;

/// Finds the target pane for one invocation.
/// Errors are limited to `NotInTmux`, `NoPanesAvailable` and `NoAiPaneFound`.
pub trait PaneLocator {
    fn locate(&self, config: &Config) -> Result<PaneDescriptor, AgsendError>;
}

/// Delivers one literal message to a pane and focuses it.
/// Errors are reported as `SendFailed`; no internal retry.
pub trait Transmitter {
    fn send(&self, pane: &PaneDescriptor, text: &str) -> Result<(), AgsendError>;
}

/// Writes text to the system clipboard.
/// Errors are `ClipboardUnavailable` or `ClipboardCopyFailed`.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), AgsendError>;
}

/// Terminal state of one dispatch pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    SentToPane {
        pane: PaneDescriptor,
    },
    SentToClipboard {
        /// When the clipboard was reached only after a pane send failed,
        /// this carries the send failure so the caller can say so.
        after_send_failure: Option<String>,
    },
    Failed(AgsendError),
}

/// Run the dispatch state machine once. Never panics and never returns a
/// raw error; every path ends in one of the three outcomes.
pub fn dispatch(
    config: &Config,
    message: &str,
    locator: &impl PaneLocator,
    transmitter: &impl Transmitter,
    clipboard: &impl Clipboard,
) -> Outcome {
    let pane = match locator.locate(config) {
        Ok(pane) => pane,
        Err(err) => {
            if !config.fallback_clipboard {
                return Outcome::Failed(err);
            }
            return match clipboard.copy(message) {
                Ok(()) => Outcome::SentToClipboard {
                    after_send_failure: None,
                },
                Err(clip_err) => Outcome::Failed(clip_err),
            };
        }
    };

    match transmitter.send(&pane, message) {
        Ok(()) => Outcome::SentToPane { pane },
        Err(send_err) => {
            if !config.fallback_clipboard {
                return Outcome::Failed(send_err);
            }
            match clipboard.copy(message) {
                Ok(()) => Outcome::SentToClipboard {
                    after_send_failure: Some(send_err.to_string()),
                },
                Err(clip_err) => Outcome::Failed(clip_err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StubLocator(Result<PaneDescriptor, AgsendError>);

    impl PaneLocator for StubLocator {
        fn locate(&self, _config: &Config) -> Result<PaneDescriptor, AgsendError> {
            self.0.clone()
        }
    }

    struct StubTransmitter {
        result: Result<(), AgsendError>,
        sent: RefCell<Vec<String>>,
    }

    impl StubTransmitter {
        fn ok() -> Self {
            Self {
                result: Ok(()),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                result: Err(AgsendError::SendFailed(reason.to_string())),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transmitter for StubTransmitter {
        fn send(&self, _pane: &PaneDescriptor, text: &str) -> Result<(), AgsendError> {
            self.sent.borrow_mut().push(text.to_string());
            self.result.clone()
        }
    }

    struct StubClipboard {
        result: Result<(), AgsendError>,
        copied: RefCell<Vec<String>>,
    }

    impl StubClipboard {
        fn ok() -> Self {
            Self {
                result: Ok(()),
                copied: RefCell::new(Vec::new()),
            }
        }

        fn unavailable() -> Self {
            Self {
                result: Err(AgsendError::ClipboardUnavailable),
                copied: RefCell::new(Vec::new()),
            }
        }
    }

    impl Clipboard for StubClipboard {
        fn copy(&self, text: &str) -> Result<(), AgsendError> {
            self.copied.borrow_mut().push(text.to_string());
            self.result.clone()
        }
    }

    fn some_pane() -> PaneDescriptor {
        PaneDescriptor {
            session_name: "work".to_string(),
            pane_id: "%3".to_string(),
            current_cmd: "claude".to_string(),
            pane_title: String::new(),
        }
    }

    #[test]
    fn pane_found_sends_to_pane() {
        let locator = StubLocator(Ok(some_pane()));
        let transmitter = StubTransmitter::ok();
        let clipboard = StubClipboard::ok();
        let outcome = dispatch(&Config::default(), "msg", &locator, &transmitter, &clipboard);
        assert!(matches!(outcome, Outcome::SentToPane { pane } if pane.pane_id == "%3"));
        assert_eq!(transmitter.sent.borrow().as_slice(), ["msg"]);
        assert!(clipboard.copied.borrow().is_empty(), "clipboard untouched");
    }

    #[test]
    fn no_pane_falls_back_to_clipboard() {
        let locator = StubLocator(Err(AgsendError::NoAiPaneFound));
        let transmitter = StubTransmitter::ok();
        let clipboard = StubClipboard::ok();
        let outcome = dispatch(&Config::default(), "msg", &locator, &transmitter, &clipboard);
        assert_eq!(
            outcome,
            Outcome::SentToClipboard {
                after_send_failure: None
            }
        );
        assert_eq!(clipboard.copied.borrow().as_slice(), ["msg"]);
    }

    #[test]
    fn no_pane_with_fallback_never_fails_given_working_clipboard() {
        for err in [
            AgsendError::NotInTmux,
            AgsendError::NoPanesAvailable("server not running".to_string()),
            AgsendError::NoAiPaneFound,
        ] {
            let locator = StubLocator(Err(err));
            let outcome = dispatch(
                &Config::default(),
                "msg",
                &locator,
                &StubTransmitter::ok(),
                &StubClipboard::ok(),
            );
            assert!(matches!(outcome, Outcome::SentToClipboard { .. }));
        }
    }

    #[test]
    fn no_pane_and_fallback_disabled_fails() {
        let config = Config {
            fallback_clipboard: false,
            ..Config::default()
        };
        let locator = StubLocator(Err(AgsendError::NoAiPaneFound));
        let clipboard = StubClipboard::ok();
        let outcome = dispatch(&config, "msg", &locator, &StubTransmitter::ok(), &clipboard);
        assert_eq!(outcome, Outcome::Failed(AgsendError::NoAiPaneFound));
        assert!(clipboard.copied.borrow().is_empty());
    }

    #[test]
    fn send_failure_falls_back_with_distinction() {
        let locator = StubLocator(Ok(some_pane()));
        let transmitter = StubTransmitter::failing("pane %3 gone");
        let clipboard = StubClipboard::ok();
        let outcome = dispatch(&Config::default(), "msg", &locator, &transmitter, &clipboard);
        match outcome {
            Outcome::SentToClipboard {
                after_send_failure: Some(reason),
            } => assert!(reason.contains("pane %3 gone")),
            other => panic!("expected fallback after send failure, got {other:?}"),
        }
    }

    #[test]
    fn send_failure_without_fallback_fails() {
        let config = Config {
            fallback_clipboard: false,
            ..Config::default()
        };
        let locator = StubLocator(Ok(some_pane()));
        let transmitter = StubTransmitter::failing("boom");
        let outcome = dispatch(&config, "msg", &locator, &transmitter, &StubClipboard::ok());
        assert_eq!(
            outcome,
            Outcome::Failed(AgsendError::SendFailed("boom".to_string()))
        );
    }

    #[test]
    fn clipboard_failure_after_no_pane_fails() {
        let locator = StubLocator(Err(AgsendError::NoAiPaneFound));
        let outcome = dispatch(
            &Config::default(),
            "msg",
            &locator,
            &StubTransmitter::ok(),
            &StubClipboard::unavailable(),
        );
        assert_eq!(outcome, Outcome::Failed(AgsendError::ClipboardUnavailable));
    }
}
