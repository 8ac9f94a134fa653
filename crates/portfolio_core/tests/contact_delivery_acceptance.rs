use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use portfolio_core::{
    ContactForm, ContactFormSubmitter, DeliveryRoute, EmailJsDelivery, MailDelivery,
    SubmissionState,
};
use tokio::net::TcpListener;
use url::Url;

#[derive(Clone)]
struct MailServiceState {
    received: Arc<Mutex<Vec<serde_json::Value>>>,
    reject_with: Option<StatusCode>,
}

async fn handle_send(
    State(state): State<MailServiceState>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, &'static str) {
    state.received.lock().expect("received log").push(body);
    match state.reject_with {
        Some(status) => (status, "The template ID not found"),
        None => (StatusCode::OK, "OK"),
    }
}

async fn spawn_mail_service(
    reject_with: Option<StatusCode>,
) -> (Url, Arc<Mutex<Vec<serde_json::Value>>>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MailServiceState {
        received: received.clone(),
        reject_with,
    };
    let app = Router::new()
        .route("/api/v1.0/email/send", post(handle_send))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let endpoint =
        Url::parse(&format!("http://{addr}/api/v1.0/email/send")).expect("endpoint url");
    (endpoint, received)
}

fn route() -> DeliveryRoute {
    DeliveryRoute {
        service_id: "service_kpvj5ad".to_string(),
        template_id: "template_9ejoaek".to_string(),
        public_key: "caPVS_0yACWtXDH9Y".to_string(),
    }
}

#[tokio::test]
async fn accepted_submission_posts_the_documented_body_and_clears_the_form() {
    let (endpoint, received) = spawn_mail_service(None).await;
    let delivery = EmailJsDelivery::with_endpoint(endpoint);
    let mut submitter = ContactFormSubmitter::new();
    let mut form = ContactForm {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        message: "hi".to_string(),
    };

    submitter.submit(Some(&mut form), &delivery, &route()).await;

    assert_eq!(submitter.state(), SubmissionState::Success);
    assert_eq!(form, ContactForm::default());

    let bodies = received.lock().expect("received log");
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["service_id"], "service_kpvj5ad");
    assert_eq!(bodies[0]["template_id"], "template_9ejoaek");
    assert_eq!(bodies[0]["user_id"], "caPVS_0yACWtXDH9Y");
    assert_eq!(bodies[0]["template_params"]["name"], "A");
    assert_eq!(bodies[0]["template_params"]["email"], "a@b.com");
    assert_eq!(bodies[0]["template_params"]["message"], "hi");
}

#[tokio::test]
async fn rejected_submission_lands_in_error_and_keeps_the_fields() {
    let (endpoint, _received) = spawn_mail_service(Some(StatusCode::BAD_REQUEST)).await;
    let delivery = EmailJsDelivery::with_endpoint(endpoint);
    let mut submitter = ContactFormSubmitter::new();
    let mut form = ContactForm {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        message: "hi".to_string(),
    };

    submitter.submit(Some(&mut form), &delivery, &route()).await;

    assert_eq!(submitter.state(), SubmissionState::Error);
    assert_eq!(form.message, "hi");
}

#[tokio::test]
async fn unreachable_mail_service_is_a_normal_error_outcome() {
    // Bind-then-drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let endpoint = Url::parse(&format!("http://{addr}/api/v1.0/email/send")).expect("url");
    let delivery = EmailJsDelivery::with_endpoint(endpoint);
    let mut submitter = ContactFormSubmitter::new();
    let mut form = ContactForm {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        message: "hi".to_string(),
    };

    submitter.submit(Some(&mut form), &delivery, &route()).await;

    assert_eq!(submitter.state(), SubmissionState::Error);
    assert_eq!(form.name, "A");
}

#[tokio::test]
async fn delivery_error_display_carries_the_rejection_status() {
    let (endpoint, _received) =
        spawn_mail_service(Some(StatusCode::UNPROCESSABLE_ENTITY)).await;
    let delivery = EmailJsDelivery::with_endpoint(endpoint);

    let err = delivery
        .send(
            &route(),
            &portfolio_core::ContactPayload {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                message: "hi".to_string(),
            },
        )
        .await
        .expect_err("rejection");

    assert!(err.to_string().contains("422"));
}
