use text_refiner::application::ports::LlmClient;
use text_refiner::application::services::build_prompt;
use text_refiner::domain::RefinementParams;
use text_refiner::infrastructure::llm::MockLlmClient;

#[tokio::test]
async fn given_echo_client_when_completing_prompt_then_returns_original_text() {
    let prompt = build_prompt("Some draft", &RefinementParams::default(), Some("be nice"));

    let reply = MockLlmClient::echo().complete(&prompt).await.unwrap();

    assert_eq!(reply, "Some draft");
}

#[tokio::test]
async fn given_fixed_reply_when_completing_then_returns_reply() {
    let reply = MockLlmClient::with_reply("fixed").complete("anything").await.unwrap();
    assert_eq!(reply, "fixed");
}
