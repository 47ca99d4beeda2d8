use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::sku::{SkuLookupForm, UpdateSkuDataForm, UploadSkuDataForm};
use crate::forms::upload::CsvUploadForm;
use crate::repository::DieselRepository;
use crate::routes::MessageResponse;
use crate::services::{ServiceError, sku as sku_service};

#[post("/update_sku_data")]
pub async fn update_sku_data(
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateSkuDataForm>,
) -> impl Responder {
    match sku_service::replace_sku_data(repo.get_ref(), form.into_inner()) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("SKU data updated successfully")),
        Err(err) => {
            log::error!("Failed to replace SKU data: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/update_sku_data/upload")]
pub async fn upload_sku_data(
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<CsvUploadForm>,
) -> impl Responder {
    let (file_name, bytes) = form.into_parts();
    let upload = UploadSkuDataForm::new(file_name, bytes);

    match sku_service::upload_sku_data(repo.get_ref(), upload) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("SKU data updated successfully")),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Err(err) => {
            log::error!("Failed to replace SKU data from upload: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// `POST` because the filter travels in the body.
#[post("/sku")]
pub async fn lookup_skus(
    repo: web::Data<DieselRepository>,
    form: web::Json<SkuLookupForm>,
) -> impl Responder {
    match sku_service::find_skus(repo.get_ref(), form.into_inner()) {
        Ok(codes) => HttpResponse::Ok().json(codes),
        Err(err) => {
            log::error!("Failed to look up SKUs: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
