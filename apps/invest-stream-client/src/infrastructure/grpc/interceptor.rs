//! Request metadata injection.

use tonic::metadata::{AsciiMetadataValue, errors::InvalidMetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

/// Metadata key carrying the bearer token.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Metadata key identifying the calling application.
pub const APP_NAME_HEADER: &str = "x-app-name";

/// Attaches `authorization: Bearer <token>` and `x-app-name` to every call.
#[derive(Clone)]
pub struct AuthInterceptor {
    authorization: AsciiMetadataValue,
    app_name: Option<AsciiMetadataValue>,
}

impl AuthInterceptor {
    /// Build an interceptor from a raw token and an optional application name.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or application name contains characters
    /// that are not valid in gRPC metadata.
    pub fn new(token: &str, app_name: Option<&str>) -> Result<Self, InvalidMetadataValue> {
        let mut authorization: AsciiMetadataValue = format!("Bearer {token}").parse()?;
        authorization.set_sensitive(true);

        let app_name = app_name
            .map(str::parse::<AsciiMetadataValue>)
            .transpose()?;

        Ok(Self {
            authorization,
            app_name,
        })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let metadata = request.metadata_mut();
        metadata.insert(AUTHORIZATION_HEADER, self.authorization.clone());
        if let Some(app_name) = &self.app_name {
            metadata.insert(APP_NAME_HEADER, app_name.clone());
        }
        Ok(request)
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor")
            .field("authorization", &"[REDACTED]")
            .field("app_name", &self.app_name)
            .finish()
    }
}
