//! 浏览器 HTTP 传输层
//!
//! 基于 `gloo-net` 的 fetch 实现核心库的 [`HttpTransport`]：
//! - 总是携带 cookie (`credentials: include`)，会话靠服务端 cookie 识别
//! - 取消令牌映射为 `AbortController`
//! - 浏览器抛出的 `AbortError` 映射为 `GatewayError::Aborted`
//! - CSRF 令牌可从 `document.cookie` 读取

use gloo_net::http::{Request, RequestBuilder};
use sakayhub_admin::request::{CSRF_COOKIE, HttpRequest, HttpResponse, HttpTransport, cookie_value};
use sakayhub_admin::{GatewayError, GatewayResult};
use sakayhub_shared::HttpMethod;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, HtmlDocument, RequestCredentials};

#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

fn map_error(e: gloo_net::Error) -> GatewayError {
    match e {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => GatewayError::Aborted,
        gloo_net::Error::JsError(js) => GatewayError::Network(js.message),
        gloo_net::Error::SerdeError(e) => GatewayError::Parse(e.to_string()),
        gloo_net::Error::GlooError(msg) => GatewayError::Network(msg),
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> GatewayResult<HttpResponse> {
        let mut builder: RequestBuilder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        builder = builder.credentials(RequestCredentials::Include);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        // 控制器要活到请求结束，取消钩子持有它的克隆
        let controller = match &req.cancel {
            Some(token) => {
                if token.is_cancelled() {
                    return Err(GatewayError::Aborted);
                }
                let controller = AbortController::new()
                    .map_err(|e| GatewayError::Network(format!("{:?}", e)))?;
                let hook = controller.clone();
                token.on_cancel(move || hook.abort());
                Some(controller)
            }
            None => None,
        };
        let signal = controller.as_ref().map(AbortController::signal);
        builder = builder.abort_signal(signal.as_ref());

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(map_error)?;

        let response = request.send().await.map_err(map_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_error)?;

        Ok(HttpResponse { status, body })
    }

    fn csrf_cookie(&self) -> Option<String> {
        let cookies = web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;
        cookie_value(&cookies, CSRF_COOKIE)
    }
}
