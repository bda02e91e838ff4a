//! HTTP endpoints for the three media kinds

use axum::{
    Json, Router,
    body::Body,
    extract::{
        DefaultBodyLimit, Multipart, Path, State,
        multipart::MultipartRejection,
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::{
    AppError,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, MalformedUploadResponse,
        NotFoundResponse, PayloadTooLargeResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{MediaError, MediaResult};
use crate::models::{
    EventPoster, PromotionalVideo, StoredMedia, UploadForm, UploadedFile, UploadedResponse,
    VenuePhoto,
};
use crate::repository::MediaStore;
use crate::service::MediaService;

/// Name of the multipart part carrying the payload
pub const FILE_FIELD: &str = "file";

/// Allowance for multipart boundaries and part headers on top of the
/// payload cap, so a payload of exactly the cap still fits the body limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// OpenAPI documentation for the media endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        posters::upload_event_poster,
        posters::get_event_poster,
        videos::upload_promotional_video,
        videos::get_promotional_video,
        photos::upload_venue_photo,
        photos::get_venue_photo,
    ),
    components(
        schemas(UploadForm, UploadedResponse),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            MalformedUploadResponse,
            PayloadTooLargeResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Media", description = "Event posters, promotional videos and venue photos")
    )
)]
pub struct ApiDoc;

/// Buffer the first part named `file`, skipping any others.
pub async fn read_file_field(multipart: &mut Multipart) -> MediaResult<UploadedFile> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let content = field.bytes().await?;

        return Ok(UploadedFile {
            filename,
            content_type,
            content,
        });
    }

    Err(MediaError::MalformedInput(format!(
        "Upload must include a '{FILE_FIELD}' field"
    )))
}

/// `inline`, with the original filename when it is safe to quote.
fn content_disposition(filename: Option<&str>) -> String {
    match filename {
        Some(name) if !name.is_empty() && name.chars().all(|c| c.is_ascii_graphic() || c == ' ') => {
            format!(
                "inline; filename=\"{}\"",
                name.replace('\\', "\\\\").replace('"', "\\\"")
            )
        }
        _ => "inline".to_string(),
    }
}

/// Full payload with its stored content type.
pub fn media_response(media: StoredMedia) -> Response {
    let headers = [
        (header::CONTENT_TYPE, media.content_type),
        (header::CONTENT_LENGTH, media.content.len().to_string()),
        (
            header::CONTENT_DISPOSITION,
            content_disposition(media.filename.as_deref()),
        ),
    ];
    (StatusCode::OK, headers, Body::from(media.content)).into_response()
}

macro_rules! media_handlers {
    (
        mod $module:ident for $kind:ident;
        upload = $upload_path:tt as $upload:ident($owner:ident = $owner_name:tt),
        download = $download_path:tt as $download:ident $(;)?
    ) => {
        pub mod $module {
            use super::*;

            /// Build the router for this kind around a store.
            pub fn router<S: MediaStore + 'static>(service: MediaService<$kind, S>) -> Router {
                let body_limit = service.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;
                Router::new()
                    .route(
                        $upload_path,
                        post($upload::<S>).layer(DefaultBodyLimit::max(body_limit)),
                    )
                    .route($download_path, get($download::<S>))
                    .with_state(Arc::new(service))
            }

            /// Upload a file
            #[utoipa::path(
                post,
                path = $upload_path,
                tag = "Media",
                params(($owner_name = String, Path, description = "Owner id; not checked for existence")),
                request_body(content_type = "multipart/form-data", content = UploadForm),
                responses(
                    (status = 200, description = "File stored", body = UploadedResponse),
                    (status = 400, response = MalformedUploadResponse),
                    (status = 413, response = PayloadTooLargeResponse),
                    (status = 500, response = InternalServerErrorResponse),
                    (status = 503, response = ServiceUnavailableResponse)
                )
            )]
            pub async fn $upload<S: MediaStore + 'static>(
                State(service): State<Arc<MediaService<$kind, S>>>,
                Path($owner): Path<String>,
                multipart: Result<Multipart, MultipartRejection>,
            ) -> Result<Json<UploadedResponse>, AppError> {
                let mut multipart = multipart?;
                let file = read_file_field(&mut multipart).await?;
                let id = service.upload($owner, file).await?;
                Ok(Json(UploadedResponse::new::<$kind>(id)))
            }

            /// Download a file with its stored content type
            #[utoipa::path(
                get,
                path = $download_path,
                tag = "Media",
                params(("id" = String, Path, description = "Media id (24 hex characters)")),
                responses(
                    (status = 200, description = "Stored bytes, served with the content type recorded at upload", content_type = "application/octet-stream", body = Vec<u8>),
                    (status = 404, response = NotFoundResponse),
                    (status = 500, response = InternalServerErrorResponse),
                    (status = 503, response = ServiceUnavailableResponse)
                )
            )]
            pub async fn $download<S: MediaStore + 'static>(
                State(service): State<Arc<MediaService<$kind, S>>>,
                Path(id): Path<String>,
            ) -> MediaResult<Response> {
                Ok(media_response(service.download(&id).await?))
            }
        }
    };
}

media_handlers! {
    mod posters for EventPoster;
    upload = "/upload_event_poster/{event_id}" as upload_event_poster(event_id = "event_id"),
    download = "/event_poster/{id}" as get_event_poster;
}

media_handlers! {
    mod videos for PromotionalVideo;
    upload = "/upload_promotional_video/{event_id}" as upload_promotional_video(event_id = "event_id"),
    download = "/promotional_video/{id}" as get_promotional_video;
}

media_handlers! {
    mod photos for VenuePhoto;
    upload = "/upload_venue_photo/{venue_id}" as upload_venue_photo(venue_id = "venue_id"),
    download = "/venue_photo/{id}" as get_venue_photo;
}
