//! Admin key authentication middleware
//!
//! Validates `Authorization: Bearer <key>` against the configured Argon2id
//! admin key hashes. Public routes (health probes, lead submission, API docs)
//! pass through untouched. With no keys configured, authentication is off.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::{Method, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use infrastructure::AdminKeyStore;
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::ApiError;

/// A route that does not require an admin key
#[derive(Debug, Clone)]
enum PublicRoute {
    /// Exact method and path
    Exact(Method, &'static str),
    /// Any method under a path prefix
    Prefix(&'static str),
}

impl PublicRoute {
    fn matches(&self, method: &Method, path: &str) -> bool {
        match self {
            Self::Exact(m, p) => m == method && *p == path,
            Self::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

fn default_public_routes() -> Vec<PublicRoute> {
    vec![
        PublicRoute::Exact(Method::GET, "/health"),
        PublicRoute::Exact(Method::GET, "/ready"),
        PublicRoute::Exact(Method::POST, "/leads"),
        PublicRoute::Prefix("/swagger-ui"),
        PublicRoute::Prefix("/api-docs"),
    ]
}

/// Layer that applies admin key authentication
#[derive(Clone, Debug)]
pub struct AdminAuthLayer {
    keys: Arc<AdminKeyStore>,
    public_routes: Arc<Vec<PublicRoute>>,
}

impl AdminAuthLayer {
    /// Protect every non-public route with the given key store
    #[must_use]
    pub fn new(keys: Arc<AdminKeyStore>) -> Self {
        Self {
            keys,
            public_routes: Arc::new(default_public_routes()),
        }
    }

    /// A layer that lets every request through
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Arc::new(AdminKeyStore::default()))
    }
}

impl<S> Layer<S> for AdminAuthLayer {
    type Service = AdminAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AdminAuth {
            inner,
            keys: Arc::clone(&self.keys),
            public_routes: Arc::clone(&self.public_routes),
        }
    }
}

/// Middleware service for admin key authentication
#[derive(Clone, Debug)]
pub struct AdminAuth<S> {
    inner: S,
    keys: Arc<AdminKeyStore>,
    public_routes: Arc<Vec<PublicRoute>>,
}

impl<S> Service<Request> for AdminAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let keys = Arc::clone(&self.keys);
        let public_routes = Arc::clone(&self.public_routes);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let path = req.uri().path();
            if keys.is_empty()
                || public_routes
                    .iter()
                    .any(|route| route.matches(req.method(), path))
            {
                return inner.call(req).await;
            }

            let auth_header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok());

            match auth_header.map(|h| h.strip_prefix("Bearer ")) {
                Some(Some(token)) => {
                    // Argon2 verification is CPU-bound
                    let token = token.to_string();
                    let verified = tokio::task::spawn_blocking(move || keys.verify(&token))
                        .await
                        .unwrap_or(false);

                    if verified {
                        debug!("Admin key verified");
                        return inner.call(req).await;
                    }
                    warn!(path = %req.uri().path(), "Rejected invalid admin key");
                    Ok(unauthorized_response("Invalid API key"))
                },
                Some(None) => Ok(unauthorized_response(
                    "Invalid authorization format, expected Bearer token",
                )),
                None => Ok(unauthorized_response("Missing Authorization header")),
            }
        })
    }
}

fn unauthorized_response(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
