//! Optional Prometheus metrics middleware wrapper.
//!
//! Wraps the whole app so the `/metrics` endpoint is answered before path
//! normalisation rewrites it.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::LocalBoxFuture;

/// Either the Prometheus middleware or a pass-through that only boxes the body.
#[derive(Clone)]
pub(crate) enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        metrics.map_or(Self::Disabled, |metrics| Self::Enabled(Arc::new(metrics)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self.clone() {
            Self::Enabled(metrics) => {
                let fut = Compat::new((*metrics).clone()).new_transform(service);
                Box::pin(async move {
                    let svc = fut.await?;
                    Ok(boxed::service(svc))
                })
            }
            Self::Disabled => Box::pin(async move {
                let svc = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Ok(boxed::service(svc))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::{App, HttpResponse, test, web};
    use actix_web_prom::PrometheusMetricsBuilder;

    use super::*;

    #[actix_web::test]
    async fn enabled_layer_serves_the_metrics_endpoint() {
        let prometheus = PrometheusMetricsBuilder::new("minerals_test")
            .endpoint("/metrics")
            .build()
            .expect("metrics builder");
        let app = test::init_service(
            App::new()
                .wrap(MetricsLayer::from_option(Some(prometheus)))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;

        assert!(res.status().is_success());
        let body = test::read_body(res).await;
        let text = std::str::from_utf8(&body).expect("utf8 metrics");
        assert!(text.contains("minerals_test_http_requests_total"));
    }

    #[actix_web::test]
    async fn disabled_layer_passes_requests_through() {
        let app = test::init_service(
            App::new()
                .wrap(MetricsLayer::from_option(None))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request())
            .await;
        assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
