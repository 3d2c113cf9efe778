use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};
use uuid::Uuid;

use crate::errors::AppError;
use crate::forms::{CommentForm, FormErrors, PostForm};
use crate::repositories::BlogRepository;
use crate::views;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(blog_list)
        .service(blog_detail)
        .service(submit_comment)
        .service(create_blog_form)
        .service(create_blog)
        .service(update_blog_form)
        .service(update_blog)
        .service(delete_blog_confirm)
        .service(delete_blog);
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[get("/")]
pub async fn blog_list(repo: web::Data<dyn BlogRepository>) -> Result<HttpResponse, AppError> {
    let posts = repo.list_posts().await?;
    Ok(html(views::blog_list_page(&posts)))
}

#[get("/blog/{id}/")]
pub async fn blog_detail(
    repo: web::Data<dyn BlogRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let post = repo.get_post(id).await?;
    let comments = repo.comments_for_post(id).await?;
    Ok(html(views::blog_detail_page(
        &post,
        &comments,
        &CommentForm::default(),
        &FormErrors::default(),
    )))
}

#[post("/blog/{id}/")]
pub async fn submit_comment(
    repo: web::Data<dyn BlogRepository>,
    path: web::Path<Uuid>,
    form: web::Form<CommentForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let post = repo.get_post(id).await?;
    let form = form.into_inner();
    match form.validate() {
        Ok(new_comment) => {
            repo.create_comment(id, new_comment).await?;
            Ok(see_other(format!("/blog/{}/", id)))
        }
        Err(errors) => {
            let comments = repo.comments_for_post(id).await?;
            Ok(html(views::blog_detail_page(&post, &comments, &form, &errors)))
        }
    }
}

#[get("/create/")]
pub async fn create_blog_form() -> HttpResponse {
    html(views::blog_form_page(
        "New post",
        "/create/",
        &PostForm::default(),
        &FormErrors::default(),
    ))
}

#[post("/create/")]
pub async fn create_blog(
    repo: web::Data<dyn BlogRepository>,
    form: web::Form<PostForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    match form.validate() {
        Ok(new_post) => {
            let post = repo.create_post(new_post).await?;
            log::info!("created post {}", post.id);
            Ok(see_other("/".to_string()))
        }
        Err(errors) => Ok(html(views::blog_form_page(
            "New post",
            "/create/",
            &form,
            &errors,
        ))),
    }
}

#[get("/update/{id}/")]
pub async fn update_blog_form(
    repo: web::Data<dyn BlogRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let post = repo.get_post(path.into_inner()).await?;
    Ok(html(views::blog_form_page(
        "Edit post",
        &format!("/update/{}/", post.id),
        &PostForm::from_post(&post),
        &FormErrors::default(),
    )))
}

#[post("/update/{id}/")]
pub async fn update_blog(
    repo: web::Data<dyn BlogRepository>,
    path: web::Path<Uuid>,
    form: web::Form<PostForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    // 404 before validation, matching the read side of this screen.
    repo.get_post(id).await?;
    let form = form.into_inner();
    match form.validate() {
        Ok(new_post) => {
            repo.update_post(id, new_post).await?;
            log::info!("updated post {}", id);
            Ok(see_other("/".to_string()))
        }
        Err(errors) => Ok(html(views::blog_form_page(
            "Edit post",
            &format!("/update/{}/", id),
            &form,
            &errors,
        ))),
    }
}

#[get("/delete/{id}/")]
pub async fn delete_blog_confirm(
    repo: web::Data<dyn BlogRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let post = repo.get_post(path.into_inner()).await?;
    Ok(html(views::confirm_delete_page(&post)))
}

#[post("/delete/{id}/")]
pub async fn delete_blog(
    repo: web::Data<dyn BlogRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    repo.delete_post(id).await?;
    log::info!("deleted post {}", id);
    Ok(see_other("/".to_string()))
}
