// =====================================================
// FILE: src/server/middleware.rs - REQUEST LANGUAGE
// =====================================================

use crate::core::constants::DEFAULT_LANGUAGE;
use crate::server::types::{AppState, ResolvedLanguage};
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::{ready, Ready};

/// Resolves the response language once per request and stores it in the
/// request extensions as a [`ResolvedLanguage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LanguageMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LanguageMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LanguageMiddlewareService { service }))
    }
}

pub struct LanguageMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for LanguageMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let resolved = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.resolve_request(req.request()));

        if let Some(lang) = resolved {
            log::debug!("{} {} -> lang '{}'", req.method(), req.path(), lang);
            req.extensions_mut().insert(lang);
        }

        self.service.call(req)
    }
}

impl FromRequest for ResolvedLanguage {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // Release the extensions borrow first: cookie parsing writes to them.
        let stored = req.extensions().get::<ResolvedLanguage>().cloned();
        let lang = stored
            .or_else(|| {
                req.app_data::<web::Data<AppState>>()
                    .map(|state| state.resolve_request(req))
            })
            .unwrap_or_else(|| ResolvedLanguage(DEFAULT_LANGUAGE.into()));

        ready(Ok(lang))
    }
}
