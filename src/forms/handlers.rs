use actix_web::{web, HttpResponse, Responder};

use super::models::{ContactRequest, EnrollmentRequest, FormResponse};
use super::validation::Validator;
use super::FormsState;
use crate::mail::templates::{
    contact_notification_html, enrollment_confirmation_html, enrollment_notification_html,
};
use crate::mail::{Attachment, OutgoingEmail};
use crate::ErrorResponse;

pub const ENROLLMENT_SUBJECT: &str = "Anmeldung und Unterrichtsvertrag Musicschool CML";
pub const ENROLLMENT_NOTIFICATION_SUBJECT: &str = "Neue Anmeldung - musicschool-cml.de";
pub const CONTACT_SUBJECT: &str = "Kontaktformular - musicschool-cml.de";

pub const CAPTCHA_FAILED: &str = "Recaptcha validation failed";
pub const CONSENT_MISSING: &str = "Einverständniserklärung nicht akzeptiert";

#[utoipa::path(
    get,
    path = "/",
    tag = "Forms",
    responses(
        (status = 200, description = "Service is up", body = FormResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(FormResponse::ok())
}

/// Enrollment form: verify, render the contract and mail it.
#[utoipa::path(
    post,
    path = "/anmeldung",
    tag = "Forms",
    request_body = EnrollmentRequest,
    responses(
        (status = 200, description = "Contract sent to the applicant", body = FormResponse),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 500, description = "Rendering or mail delivery failed", body = ErrorResponse)
    )
)]
pub async fn submit_enrollment(
    state: web::Data<FormsState>,
    body: web::Json<EnrollmentRequest>,
) -> impl Responder {
    let request = body.into_inner();

    if !state.captcha.verify(&request.token).await {
        log::warn!("Enrollment rejected: {}", CAPTCHA_FAILED);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(CAPTCHA_FAILED));
    }

    if !request.record.consent_given {
        log::warn!("Enrollment rejected: {}", CONSENT_MISSING);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(CONSENT_MISSING));
    }

    if let Err(message) = request.validate() {
        log::warn!("Enrollment rejected: {}", message);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message));
    }

    let record = request.record;
    let renderer = state.renderer.clone();
    let render_record = record.clone();
    let document = match web::block(move || renderer.render(&render_record)).await {
        Ok(Ok(document)) => document,
        Ok(Err(e)) => {
            log::error!("Failed to render contract: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()));
        }
        Err(e) => {
            log::error!("Contract render task failed: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()));
        }
    };

    let attachment = Attachment::pdf(document.filename, document.pdf);

    let confirmation = OutgoingEmail::new(
        &state.mail_from,
        record.email.trim(),
        ENROLLMENT_SUBJECT,
        enrollment_confirmation_html(),
    )
    .with_attachment(attachment.clone());

    let id = match state.mailer.send(confirmation).await {
        Ok(id) => id,
        Err(e) => {
            log::error!("Failed to send enrollment confirmation: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()));
        }
    };

    // The applicant already has the contract; a failed copy to the school
    // must not make the form report an error.
    let notification = OutgoingEmail::new(
        &state.mail_from,
        &state.receiver,
        ENROLLMENT_NOTIFICATION_SUBJECT,
        enrollment_notification_html(&record),
    )
    .with_attachment(attachment);

    if let Err(e) = state.mailer.send(notification).await {
        log::error!("Failed to send enrollment notification: {}", e);
    }

    log::info!("Enrollment for '{}' processed", record.student_name);
    HttpResponse::Ok().json(FormResponse::sent(id))
}

/// Contact form: forward the message to the school.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Forms",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message forwarded", body = FormResponse),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 500, description = "Mail delivery failed", body = ErrorResponse)
    )
)]
pub async fn submit_contact(
    state: web::Data<FormsState>,
    body: web::Json<ContactRequest>,
) -> impl Responder {
    let request = body.into_inner();

    if !state.captcha.verify(&request.token).await {
        log::warn!("Contact message rejected: {}", CAPTCHA_FAILED);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(CAPTCHA_FAILED));
    }

    if let Err(message) = request.validate() {
        log::warn!("Contact message rejected: {}", message);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message));
    }

    let email = OutgoingEmail::new(
        &state.mail_from,
        &state.receiver,
        CONTACT_SUBJECT,
        contact_notification_html(&request.name, &request.message, request.email.trim()),
    );

    match state.mailer.send(email).await {
        Ok(id) => HttpResponse::Ok().json(FormResponse::sent(id)),
        Err(e) => {
            log::error!("Failed to send contact message: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}
