//! Link creation, lookup, deletion and click tracking.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    generate_code, is_reserved_code, is_valid_code, validate_code,
};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Attempts made to find an unused generated code before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for managing short links.
///
/// All business rules live here; handlers only translate HTTP to calls on
/// this type.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// An empty `custom_code` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is malformed.
    /// Returns [`AppError::Conflict`] if the code already exists or is reserved.
    /// Returns [`AppError::Internal`] if no free code was found after
    /// [`MAX_GENERATION_ATTEMPTS`] tries.
    pub async fn create_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&url).map_err(|e| {
            AppError::bad_request(
                "Invalid URL. Include http:// or https://",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let code = match custom_code.filter(|c| !c.is_empty()) {
            Some(custom) => {
                validate_code(&custom)?;
                if is_reserved_code(&custom) {
                    return Err(AppError::conflict(
                        "Code is reserved",
                        json!({ "code": custom }),
                    ));
                }
                custom
            }
            None => self.generate_unique_code().await?,
        };

        let link = self.link_repository.create(NewLink { code, url }).await?;

        info!(code = %link.code, url = %link.url, "Link created");
        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Deletes a link.
    ///
    /// Succeeds whether or not the code existed.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.link_repository.delete(code).await? {
            info!(code, "Link deleted");
        } else {
            debug!(code, "Delete requested for unknown code");
        }

        Ok(())
    }

    /// Records one visit and returns the updated link.
    ///
    /// Codes outside the accepted format are reported as not found without
    /// querying the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn follow_link(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(not_found(code));
        }

        let link = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        debug!(code, clicks = link.clicks, "Click recorded");
        Ok(link)
    }

    /// Generates a code that is not yet taken.
    ///
    /// The existence check and the later insert are not atomic; a concurrent
    /// insert of the same code surfaces as a conflict from the store.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if !is_reserved_code(&code) && !self.link_repository.exists(&code).await? {
                return Ok(code);
            }

            warn!(code = %code, attempt, "Generated code collided");
        }

        error!(attempts = MAX_GENERATION_ATTEMPTS, "No free code found");
        Err(AppError::internal(
            "Unable to generate unique code, try again.",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Link not found", json!({ "code": code }))
}
