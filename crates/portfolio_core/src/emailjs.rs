//! EmailJS implementation of the delivery collaborator.
//!
//! One JSON POST per submission; no retry, no backoff, no response-body
//! inspection beyond surfacing the rejection text in the error.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::contact::{ContactPayload, DeliveryRoute, MailDelivery};
use crate::error::DeliveryError;

pub const EMAILJS_SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

pub struct EmailJsDelivery {
    http: Client,
    endpoint: Url,
}

impl EmailJsDelivery {
    pub fn new() -> Self {
        let endpoint = Url::parse(EMAILJS_SEND_ENDPOINT)
            .unwrap_or_else(|err| unreachable!("static EmailJS endpoint must parse: {err}"));
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Point at a different send endpoint (tests, self-hosted relay).
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Default for EmailJsDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailDelivery for EmailJsDelivery {
    async fn send(
        &self,
        route: &DeliveryRoute,
        payload: &ContactPayload,
    ) -> Result<(), DeliveryError> {
        let request = SendEmailRequest {
            service_id: &route.service_id,
            template_id: &route.template_id,
            user_id: &route.public_key,
            template_params: payload,
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "mail service rejected contact request");
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        tracing::info!("mail service accepted contact request");
        Ok(())
    }
}
