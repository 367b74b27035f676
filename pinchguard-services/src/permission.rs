// SPDX-License-Identifier: LGPL-3.0-only

//! Device permission requests made at shell startup.
//!
//! The outcome only matters to whatever feature uses the capability; the
//! touch dispatcher neither waits for nor looks at it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Request code used for the camera permission prompt.
pub const CAMERA_REQUEST_CODE: i32 = 101;

/// Device capabilities the shell asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// The device camera.
    Camera,
}

impl Permission {
    /// The request code passed along with the platform prompt.
    pub fn request_code(self) -> i32 {
        match self {
            Permission::Camera => CAMERA_REQUEST_CODE,
        }
    }
}

/// Whether a permission is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    /// The permission is held.
    Granted,
    /// The user or the platform refused it.
    Denied,
}

/// Errors that can occur while talking to the platform permission system.
#[derive(Debug, thiserror::Error)]
pub enum PermissionError {
    /// The platform could not be reached.
    #[error("Permission backend unavailable: {0}")]
    Unavailable(String),

    /// The prompt was dismissed without an answer.
    #[error("Permission request {0} was interrupted")]
    Interrupted(i32),
}

/// Access to the platform permission system.
#[async_trait]
pub trait PermissionBackend: Send + Sync {
    /// Current status, without prompting.
    async fn check(&self, permission: Permission) -> Result<PermissionStatus, PermissionError>;

    /// Prompt the user.
    async fn request(
        &self,
        permission: Permission,
        request_code: i32,
    ) -> Result<PermissionStatus, PermissionError>;
}

/// Requests permissions through a [PermissionBackend].
pub struct PermissionService<B> {
    backend: Arc<B>,
}

impl<B> Clone for PermissionService<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
        }
    }
}

impl<B: PermissionBackend + 'static> PermissionService<B> {
    /// Create a service on top of `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// The backend requests go through.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Make sure `permission` is held, prompting only if it is not.
    ///
    /// A denial is a normal `Ok(PermissionStatus::Denied)`.
    pub async fn ensure(&self, permission: Permission) -> Result<PermissionStatus, PermissionError> {
        if self.backend.check(permission).await? == PermissionStatus::Granted {
            log::debug!("{:?} permission already granted", permission);
            return Ok(PermissionStatus::Granted);
        }

        log::info!("Requesting {:?} permission", permission);
        let status = self
            .backend
            .request(permission, permission.request_code())
            .await?;
        if status == PermissionStatus::Denied {
            log::warn!("{:?} permission denied", permission);
        }
        Ok(status)
    }

    /// Start the startup camera request on the current tokio runtime.
    ///
    /// Returns immediately. Callers that care about the outcome can await the
    /// handle; startup does not.
    pub fn spawn_startup_request(&self) -> JoinHandle<Result<PermissionStatus, PermissionError>> {
        let service = self.clone();
        tokio::spawn(async move {
            let result = service.ensure(Permission::Camera).await;
            if let Err(e) = &result {
                log::error!("Camera permission request failed: {}", e);
            }
            result
        })
    }
}
