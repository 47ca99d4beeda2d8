use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::metadata::{
    AddCategoryForm, AddDepartmentForm, AddLocationForm, AddSubcategoryForm,
    DeleteDepartmentForm, EditDepartmentForm, UpdateMetadataForm, UploadMetadataForm,
};
use crate::forms::upload::CsvUploadForm;
use crate::repository::DieselRepository;
use crate::routes::MessageResponse;
use crate::services::{ServiceError, metadata as metadata_service};

#[post("/update_metadata")]
pub async fn update_metadata(
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateMetadataForm>,
) -> impl Responder {
    match metadata_service::replace_metadata(repo.get_ref(), form.into_inner()) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Metadata updated successfully")),
        Err(err) => {
            log::error!("Failed to replace metadata: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/update_metadata/upload")]
pub async fn upload_metadata(
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<CsvUploadForm>,
) -> impl Responder {
    let (file_name, bytes) = form.into_parts();
    let upload = UploadMetadataForm::new(file_name, bytes);

    match metadata_service::upload_metadata(repo.get_ref(), upload) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Metadata updated successfully")),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Err(err) => {
            log::error!("Failed to replace metadata from upload: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/location")]
pub async fn show_locations(repo: web::Data<DieselRepository>) -> impl Responder {
    match metadata_service::list_locations(repo.get_ref()) {
        Ok(locations) => HttpResponse::Ok().json(locations),
        Err(err) => {
            log::error!("Failed to list locations: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/location")]
pub async fn add_location(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddLocationForm>,
) -> impl Responder {
    match metadata_service::create_location(repo.get_ref(), form.into_inner()) {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new("Location added")),
        Err(err) => {
            log::error!("Failed to add location: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/location/{location_id}/department")]
pub async fn show_departments(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let location = path.into_inner();

    match metadata_service::list_departments(repo.get_ref(), &location) {
        Ok(departments) => HttpResponse::Ok().json(departments),
        Err(err) => {
            log::error!("Failed to list departments for {location}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/location/{location_id}/department")]
pub async fn add_department(
    _path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddDepartmentForm>,
) -> impl Responder {
    match metadata_service::create_department(repo.get_ref(), form.into_inner()) {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new("Department added")),
        Err(err) => {
            log::error!("Failed to add department: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/location/{location_id}/department")]
pub async fn edit_department(
    _path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditDepartmentForm>,
) -> impl Responder {
    match metadata_service::modify_department(repo.get_ref(), form.into_inner()) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Department updated")),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageResponse::new("Department not found"))
        }
        Err(err) => {
            log::error!("Failed to update department: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/location/{location_id}/department")]
pub async fn delete_department(
    _path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<DeleteDepartmentForm>,
) -> impl Responder {
    match metadata_service::remove_department(repo.get_ref(), form.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Department deleted")),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageResponse::new("Department not found"))
        }
        Err(err) => {
            log::error!("Failed to delete department: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/category")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match metadata_service::list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/category")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCategoryForm>,
) -> impl Responder {
    match metadata_service::create_category(repo.get_ref(), form.into_inner()) {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new("Category added")),
        Err(err) => {
            log::error!("Failed to add category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/subcategory")]
pub async fn show_subcategories(repo: web::Data<DieselRepository>) -> impl Responder {
    match metadata_service::list_subcategories(repo.get_ref()) {
        Ok(subcategories) => HttpResponse::Ok().json(subcategories),
        Err(err) => {
            log::error!("Failed to list subcategories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/subcategory")]
pub async fn add_subcategory(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddSubcategoryForm>,
) -> impl Responder {
    match metadata_service::create_subcategory(repo.get_ref(), form.into_inner()) {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new("Subcategory added")),
        Err(err) => {
            log::error!("Failed to add subcategory: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
