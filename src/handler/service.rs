//! hyper `Service` integration
//!
//! Lets a hyper connection drive [`StaticFileHandler`] directly:
//! `http1::Builder::new().serve_connection(io, handler)`.

use crate::handler::StaticFileHandler;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::Service;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

impl<B> Service<Request<B>> for StaticFileHandler {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let resp = self.handle(&req);
        Box::pin(async move { Ok(resp.await) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_service_call_answers_request() {
        let handler = StaticFileHandler::new("/nonexistent-root-for-sfh-service");
        let req = Request::builder().uri("/readme").body(()).unwrap();

        let resp = handler.call(req).await.unwrap();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/html");
    }
}
