//! 原生 Web API 封装模块
//!
//! 所有直接接触 window / history / fetch 的代码都集中在这里。

mod download;
mod http;
pub mod router;

pub use download::download_text;
pub use http::FetchTransport;
