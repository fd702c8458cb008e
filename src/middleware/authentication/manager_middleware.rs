use crate::helpers::JsonResponse;
use crate::middleware::authentication::method;
use crate::services::CredentialVerifier;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse},
    web, Error, HttpMessage,
};
use futures::{
    future::{FutureExt, LocalBoxFuture},
    task::{Context, Poll},
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub struct ManagerMiddleware<S> {
    pub service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for ManagerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        if let Ok(service) = self.service.try_borrow_mut() {
            service.poll_ready(ctx)
        } else {
            Poll::Pending
        }
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        async move {
            let verifier = match req.app_data::<web::Data<CredentialVerifier>>() {
                Some(verifier) => verifier.clone(),
                None => {
                    tracing::error!("CredentialVerifier is not registered as app data");
                    return Err(JsonResponse::build().internal_server_error(""));
                }
            };

            let credential = method::try_jwt(&req, verifier.get_ref())
                .map_err(|_| JsonResponse::build().unauthorized("Unauthorized"))?;

            if req.extensions_mut().insert(Arc::new(credential)).is_some() {
                tracing::error!("credential middleware already called once");
                return Err(JsonResponse::build().internal_server_error(""));
            }

            Ok(req)
        }
        .then(|req: Result<ServiceRequest, Error>| async move {
            match req {
                Ok(req) => {
                    let fut = service.borrow_mut().call(req);
                    fut.await
                }
                Err(err) => Err(err),
            }
        })
        .boxed_local()
    }
}
