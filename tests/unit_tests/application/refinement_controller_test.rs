use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use text_refiner::application::ports::{Clipboard, ClipboardError, LlmClient, LlmClientError};
use text_refiner::application::services::{
    BLANK_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, RefinementController, RefinementError,
    RefinementService,
};
use text_refiner::domain::{Phase, RefinementParams, RefinementRequest, SubmissionId};

struct CountingLlmClient {
    reply: Result<&'static str, &'static str>,
    calls: AtomicUsize,
}

impl CountingLlmClient {
    fn replying(text: &'static str) -> Self {
        Self {
            reply: Ok(text),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            reply: Err(message),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for CountingLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(str::to_string)
            .map_err(|m| LlmClientError::ApiRequestFailed(m.to_string()))
    }

    fn model(&self) -> &str {
        "counting"
    }
}

#[derive(Default)]
struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("headless".to_string()));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn request(text: &str) -> RefinementRequest {
    RefinementRequest::new(text, RefinementParams::default())
}

#[tokio::test]
async fn given_blank_text_when_refining_then_client_is_never_called() {
    let client = Arc::new(CountingLlmClient::replying("unused"));
    let service = RefinementService::new(client.clone());
    let mut controller = RefinementController::new();

    let result = controller.refine(&service, &request("   ")).await;

    match result {
        Err(RefinementError::Validation(message)) => assert_eq!(message, BLANK_INPUT_MESSAGE),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    assert_eq!(controller.state().phase(), Phase::Idle);
    assert!(!controller.state().is_loading);
}

#[tokio::test]
async fn given_successful_reply_when_refining_then_state_reaches_success() {
    let client = Arc::new(CountingLlmClient::replying("\"Refined.\""));
    let service = RefinementService::new(client);
    let mut controller = RefinementController::new();

    let state = controller.refine(&service, &request("raw")).await.unwrap();

    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.original_text, "raw");
    assert_eq!(state.refined_text, "Refined.");
    assert!(!state.show_diff);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn given_failing_reply_when_refining_then_keeps_original_and_sets_error() {
    let client = Arc::new(CountingLlmClient::failing("quota exceeded"));
    let service = RefinementService::new(client);
    let mut controller = RefinementController::new();

    let state = controller.refine(&service, &request("raw")).await.unwrap();

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.original_text, "raw");
    assert!(state.refined_text.is_empty());
    assert!(state.error.as_deref().unwrap().contains("quota exceeded"));
}

#[test]
fn given_submit_when_state_had_diff_and_error_then_resets_them() {
    let mut controller = RefinementController::new();
    let first = controller.submit("one").unwrap();
    controller.settle_success(first, "uno".to_string());
    controller.toggle_diff();
    assert!(controller.state().show_diff);

    controller.submit("two").unwrap();

    let state = controller.state();
    assert!(state.is_loading);
    assert!(!state.show_diff);
    assert!(state.refined_text.is_empty());
    assert_eq!(state.error, None);
}

#[test]
fn given_stale_submission_when_settling_then_result_is_ignored() {
    let mut controller = RefinementController::new();
    let first = controller.submit("first").unwrap();
    let second = controller.submit("second").unwrap();
    assert!(second > first);
    assert_eq!(controller.latest_submission(), Some(second));

    assert!(!controller.settle_success(first, "stale".to_string()));
    assert!(controller.state().is_loading);

    assert!(controller.settle_success(second, "fresh".to_string()));
    assert_eq!(controller.state().refined_text, "fresh");
    assert_eq!(controller.state().original_text, "second");
}

#[test]
fn given_settled_submission_when_settling_again_then_ignored() {
    let mut controller = RefinementController::new();
    let id = controller.submit("text").unwrap();
    assert!(controller.settle_success(id, "done".to_string()));

    let error = RefinementError::Validation("late".to_string());
    assert!(!controller.settle_failure(id, &error));
    assert_eq!(controller.state().phase(), Phase::Success);
}

#[test]
fn given_unknown_submission_when_settling_then_ignored() {
    let mut controller = RefinementController::new();
    controller.submit("text").unwrap();

    assert!(!controller.settle_success(SubmissionId::from_u64(99), "ghost".to_string()));
}

#[test]
fn given_error_without_message_when_settling_then_uses_generic_message() {
    let mut controller = RefinementController::new();
    let id = controller.submit("text").unwrap();

    controller.settle_failure(
        id,
        &RefinementError::Service(LlmClientError::ServiceReported("  ".to_string())),
    );

    assert_eq!(controller.state().error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
}

#[test]
fn given_refined_text_when_toggling_diff_twice_then_restores_flag() {
    let mut controller = RefinementController::new();
    let id = controller.submit("text").unwrap();
    controller.settle_success(id, "better text".to_string());

    assert!(controller.toggle_diff());
    assert!(controller.state().show_diff);
    assert!(controller.toggle_diff());
    assert!(!controller.state().show_diff);
}

#[test]
fn given_empty_state_when_toggling_diff_then_nothing_changes() {
    let mut controller = RefinementController::new();

    assert!(!controller.toggle_diff());
    assert!(!controller.state().show_diff);
}

#[test]
fn given_refined_text_when_copying_then_clipboard_receives_it() {
    let mut controller = RefinementController::new();
    let id = controller.submit("text").unwrap();
    controller.settle_success(id, "copy me".to_string());
    let clipboard = RecordingClipboard::default();

    assert!(controller.copy_refined_text(&clipboard));
    assert_eq!(*clipboard.copied.lock().unwrap(), vec!["copy me".to_string()]);
}

#[test]
fn given_failing_clipboard_when_copying_then_returns_false_without_touching_state() {
    let mut controller = RefinementController::new();
    let id = controller.submit("text").unwrap();
    controller.settle_success(id, "copy me".to_string());
    let before = controller.state().clone();
    let clipboard = RecordingClipboard {
        fail: true,
        ..RecordingClipboard::default()
    };

    assert!(!controller.copy_refined_text(&clipboard));
    assert_eq!(controller.state(), &before);
}

#[test]
fn given_nothing_refined_when_copying_then_clipboard_untouched() {
    let controller = RefinementController::new();
    let clipboard = RecordingClipboard::default();

    assert!(!controller.copy_refined_text(&clipboard));
    assert!(clipboard.copied.lock().unwrap().is_empty());
}
