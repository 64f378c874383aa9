use text_refiner::domain::{Phase, SubmissionId, UiState};

#[test]
fn given_default_state_when_created_then_is_idle() {
    let state = UiState::default();

    assert_eq!(state.phase(), Phase::Idle);
    assert!(!state.show_diff);
    assert!(!state.has_text());
}

#[test]
fn given_loading_state_when_asking_phase_then_returns_loading() {
    let state = UiState {
        original_text: "x".to_string(),
        is_loading: true,
        ..UiState::default()
    };
    assert_eq!(state.phase(), Phase::Loading);
}

#[test]
fn given_error_state_when_asking_phase_then_returns_failed() {
    let state = UiState {
        original_text: "x".to_string(),
        error: Some("boom".to_string()),
        ..UiState::default()
    };
    assert_eq!(state.phase(), Phase::Failed);
}

#[test]
fn given_submission_id_when_advanced_then_increments() {
    let first = SubmissionId::from_u64(1);
    assert_eq!(first.next().as_u64(), 2);
    assert!(first.next() > first);
}
