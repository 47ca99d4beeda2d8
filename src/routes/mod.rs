use actix_multipart::form::MultipartFormConfig;
use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

pub mod metadata;
pub mod sku;

/// Largest accepted request body, for JSON bulk replaces and CSV uploads alike.
pub const PAYLOAD_LIMIT_BYTES: usize = 32 * 1024 * 1024;

/// JSON body used for every acknowledgement and handled error.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register the `/api/v1` scope on an actix application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(PAYLOAD_LIMIT_BYTES)
        .error_handler(|err, _req| {
            log::warn!("Rejected request payload: {err}");
            let response = HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()));
            InternalError::from_response(err, response).into()
        });

    // CSV fields are buffered in memory, so the memory limit has to cover them.
    let multipart_config = MultipartFormConfig::default()
        .total_limit(PAYLOAD_LIMIT_BYTES)
        .memory_limit(PAYLOAD_LIMIT_BYTES)
        .error_handler(|err, _req| {
            log::warn!("Rejected upload: {err}");
            let response = HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()));
            InternalError::from_response(err, response).into()
        });

    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config)
            .app_data(multipart_config)
            .service(metadata::update_metadata)
            .service(metadata::upload_metadata)
            .service(metadata::show_locations)
            .service(metadata::add_location)
            .service(metadata::show_departments)
            .service(metadata::add_department)
            .service(metadata::edit_department)
            .service(metadata::delete_department)
            .service(metadata::show_categories)
            .service(metadata::add_category)
            .service(metadata::show_subcategories)
            .service(metadata::add_subcategory)
            .service(sku::update_sku_data)
            .service(sku::upload_sku_data)
            .service(sku::lookup_skus),
    );
}
