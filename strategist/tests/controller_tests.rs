use gemini_client::{testing::MockModel, Content, GeminiError, GenerativeModel};
use std::sync::Arc;
use strategist::{
    controller::{Controller, ControllerState},
    export::MARKDOWN_MIME,
    prompt::{ContentOptions, GenerationRequest, NewsletterSection, TechnicalLevel},
    session::SessionContext,
};

fn blog_request(topic: &str) -> GenerationRequest {
    GenerationRequest::new(
        topic,
        ContentOptions::BlogPost {
            level: TechnicalLevel::Intermediate,
            include_code: true,
        },
    )
    .unwrap()
}

#[tokio::test]
async fn successful_generation_returns_renderable_artifact() {
    let mock = Arc::new(MockModel::new());
    mock.enqueue_reply("# Large Language Models\n\nAn overview.");
    let model: Arc<dyn GenerativeModel> = mock.clone();

    let mut session = SessionContext::new();
    let mut controller = Controller::new(model);

    let request = blog_request("Large Language Models");
    let content = controller.generate(&mut session, &request).await.unwrap();

    assert_eq!(content.body, "# Large Language Models\n\nAn overview.");
    assert_eq!(content.file_name, "blog_post_large_language_models.md");
    assert_eq!(content.mime_type, MARKDOWN_MIME);
    assert_eq!(controller.state(), ControllerState::Idle);

    // The model received exactly the built prompt as the sole user turn.
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec![Content::user(request.prompt())]);
}

#[tokio::test]
async fn consecutive_generations_reuse_the_conversation_handle() {
    let mock = Arc::new(MockModel::new());
    mock.enqueue_reply("first").enqueue_reply("second");
    let model: Arc<dyn GenerativeModel> = mock.clone();

    let mut session = SessionContext::new();
    let mut controller = Controller::new(model);

    controller
        .generate(&mut session, &blog_request("Topic One"))
        .await
        .unwrap();
    controller
        .generate(&mut session, &blog_request("Topic Two"))
        .await
        .unwrap();

    // One handle, with conversation context accumulating across requests.
    let chat = session.chat().unwrap();
    assert_eq!(chat.len(), 4);
    let calls = mock.calls();
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[1].len(), 3);
    assert_eq!(calls[1][1], Content::model("first"));
}

#[tokio::test]
async fn failed_generation_yields_no_artifact_and_returns_to_idle() {
    let mock = Arc::new(MockModel::new());
    mock.enqueue_error(GeminiError::Invariant("no candidate in response".to_string()));
    let model: Arc<dyn GenerativeModel> = mock.clone();

    let mut session = SessionContext::new();
    let mut controller = Controller::new(model);

    let result = controller
        .generate(&mut session, &blog_request("Doomed Topic"))
        .await;

    let error = result.unwrap_err();
    assert!(error.to_string().starts_with("Error generating content:"));
    assert_eq!(controller.state(), ControllerState::Idle);
    // The failed exchange left the conversation history unchanged.
    assert!(session.chat().unwrap().is_empty());
}

#[tokio::test]
async fn failed_then_successful_generation_shares_the_handle() {
    let mock = Arc::new(MockModel::new());
    mock.enqueue_error(GeminiError::Invariant("boom".to_string()));
    mock.enqueue_reply("recovered");
    let model: Arc<dyn GenerativeModel> = mock.clone();

    let mut session = SessionContext::new();
    let mut controller = Controller::new(model);

    assert!(controller
        .generate(&mut session, &blog_request("First Try"))
        .await
        .is_err());
    let content = controller
        .generate(&mut session, &blog_request("Second Try"))
        .await
        .unwrap();

    assert_eq!(content.body, "recovered");
    assert_eq!(session.chat().unwrap().len(), 2);
}

#[tokio::test]
async fn empty_topic_never_reaches_the_model() {
    let mock = Arc::new(MockModel::new());

    let request = GenerationRequest::new(
        "",
        ContentOptions::Newsletter {
            sections: NewsletterSection::DEFAULT.to_vec(),
        },
    );

    assert_eq!(
        request.unwrap_err().to_string(),
        "Please enter a topic first."
    );
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn independent_sessions_hold_independent_handles() {
    let mock = Arc::new(MockModel::new());
    mock.enqueue_reply("for session a").enqueue_reply("for session b");
    let model: Arc<dyn GenerativeModel> = mock.clone();

    let mut session_a = SessionContext::new();
    let mut session_b = SessionContext::new();
    let mut controller = Controller::new(model);

    controller
        .generate(&mut session_a, &blog_request("Topic A"))
        .await
        .unwrap();
    controller
        .generate(&mut session_b, &blog_request("Topic B"))
        .await
        .unwrap();

    assert_eq!(session_a.chat().unwrap().len(), 2);
    assert_eq!(session_b.chat().unwrap().len(), 2);
    // Session B's call saw no context from session A.
    assert_eq!(mock.calls()[1].len(), 1);
}
