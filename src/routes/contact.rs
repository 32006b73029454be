use crate::domain::{ContactRequest, EmailAddress};
use crate::email_client::EmailClient;
use actix_http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use std::fmt::{Debug, Formatter};

#[derive(serde::Deserialize)]
pub struct ContactFormData {
    // Absent and empty fields take the same rejection path
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    service: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    recipient: String,
}

impl TryFrom<ContactFormData> for ContactRequest {
    type Error = String;

    fn try_from(value: ContactFormData) -> Result<Self, Self::Error> {
        // Defense in depth: the form validates client-side too, but the two
        // sides are not trusted to agree.
        let required = [
            &value.name,
            &value.email,
            &value.country,
            &value.service,
            &value.description,
            &value.recipient,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err("Missing required fields".into());
        }
        let email =
            EmailAddress::parse(value.email).map_err(|_| "Invalid email format".to_string())?;
        Ok(ContactRequest {
            name: value.name,
            email,
            country: value.country,
            service: value.service,
            description: value.description,
            recipient: value.recipient,
        })
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<String> for ContactError {
    fn from(s: String) -> Self {
        Self::ValidationError(s)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ContactError::ValidationError(reason) => serde_json::json!({
                "success": false,
                "error": reason,
            }),
            ContactError::UnexpectedError(e) => serde_json::json!({
                "success": false,
                "error": "Failed to send email",
                "details": e.root_cause().to_string(),
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(body, email_client),
    fields(
        submitter_email = tracing::field::Empty,
        service = tracing::field::Empty,
    )
)]
pub async fn submit_contact(
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    // Parsed by hand so a malformed payload takes the unexpected-error path
    // (500 with details) instead of actix's default 400.
    let form: ContactFormData =
        serde_json::from_slice(&body).context("Failed to parse the contact form payload")?;
    let request = ContactRequest::try_from(form)?;
    tracing::Span::current()
        .record("submitter_email", &tracing::field::display(&request.email))
        .record("service", &tracing::field::display(&request.service));

    // Dispatch failures are logged and swallowed, the caller still gets a
    // success response. Reproduces the behavior of the site this replaced;
    // see DESIGN.md before changing it.
    if let Err(e) = dispatch_notifications(&email_client, &request).await {
        tracing::error!(
            error.cause_chain = ?e,
            "Failed to dispatch contact notifications"
        );
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Emails sent successfully to Admin and User!",
    })))
}

/// Admin notice first, then the sender acknowledgement; the first failure
/// skips whatever is left.
#[tracing::instrument(
    name = "Dispatching contact notifications",
    skip(email_client, request)
)]
async fn dispatch_notifications(
    email_client: &EmailClient,
    request: &ContactRequest,
) -> Result<(), reqwest::Error> {
    email_client
        .send_mail(
            &request.recipient,
            &format!("New Contact Form Submission: {}", request.service),
            &admin_notice_html(request),
            &admin_notice_text(request),
        )
        .await?;
    email_client
        .send_mail(
            request.email.as_ref(),
            "We've received your message!",
            &acknowledgement_html(request),
            &acknowledgement_text(request),
        )
        .await
}

fn admin_notice_html(request: &ContactRequest) -> String {
    format!(
        "<h2>New Contact Form Submission</h2>\
        <p><strong>Name:</strong> {}</p>\
        <p><strong>Email:</strong> {}</p>\
        <p><strong>Country:</strong> {}</p>\
        <p><strong>Service:</strong> {}</p>\
        <p><strong>Description:</strong><br>{}</p>\
        <p>This message was sent automatically from the website contact form.</p>",
        request.name,
        request.email,
        request.country,
        request.service,
        request.description.replace('\n', "<br>"),
    )
}

fn admin_notice_text(request: &ContactRequest) -> String {
    format!(
        "New contact form submission\n\
        Name: {}\n\
        Email: {}\n\
        Country: {}\n\
        Service: {}\n\
        Description:\n{}",
        request.name, request.email, request.country, request.service, request.description,
    )
}

fn acknowledgement_html(request: &ContactRequest) -> String {
    format!(
        "<h2>Hi {},</h2>\
        <p>Thank you for reaching out to us regarding <strong>{}</strong>.</p>\
        <p>We have received your message and our team will review it shortly.</p>\
        <p>The Design and Developer Hub Team</p>",
        request.name, request.service,
    )
}

fn acknowledgement_text(request: &ContactRequest) -> String {
    format!(
        "Hi {},\n\
        Thank you for reaching out to us regarding {}.\n\
        We have received your message and our team will review it shortly.\n\
        The Design and Developer Hub Team",
        request.name, request.service,
    )
}

pub(crate) fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
