// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{convert::Infallible, future::Ready, sync::Arc};

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode, header};
use http_body_util::Full;
use hyper::service::Service;

use rwai_site::{Rendered, Site};

use crate::errors::BackendError;

const HTML: &str = "text/html; charset=utf-8";
const ALLOWED_METHODS: &str = "GET, HEAD";

/// Serves the pages of the site. Cloned for every connection.
#[derive(Clone)]
pub struct Server {
    site: Arc<Site>,
}

impl Server {
    pub fn new(site: Site) -> Self {
        Self { site: Arc::new(site) }
    }

    fn respond<B>(&self, request: &Request<B>) -> Result<Response<Full<Bytes>>, BackendError> {
        let method = request.method();
        if method != Method::GET && method != Method::HEAD {
            return Ok(Response::builder()
                .status(StatusCode::METHOD_NOT_ALLOWED)
                .header(header::ALLOW, ALLOWED_METHODS)
                .body(Full::default())?);
        }

        let uri = request.uri();
        let (builder, html) = match self.site.render_path(uri.path(), uri.query()) {
            Rendered::Page(html) => (
                Response::builder().status(StatusCode::OK).header(header::CONTENT_TYPE, HTML),
                html,
            ),
            Rendered::NotFound(html) => (
                Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .header(header::CONTENT_TYPE, HTML),
                html,
            ),
            Rendered::Redirect(location) => (
                Response::builder().status(StatusCode::FOUND).header(header::LOCATION, location),
                String::new(),
            ),
        };

        let body = if method == Method::HEAD { Full::default() } else { Full::from(html) };
        Ok(builder.body(body)?)
    }
}

impl<B> Service<Request<B>> for Server {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn call(&self, request: Request<B>) -> Self::Future {
        let response = self.respond(&request).unwrap_or_else(|err| {
            tracing::error!(method = %request.method(), uri = %request.uri(), "{err}");
            let mut response = Response::new(Full::from("Internal Server Error"));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        });
        tracing::info!(
            method = %request.method(),
            uri = %request.uri(),
            status = response.status().as_u16(),
            "Request"
        );
        std::future::ready(Ok(response))
    }
}
