//! Cayley HTTP 客户端
//!
//! 封装 Cayley REST API v2，提供四元组读写删除和查询执行接口。
//! 查询文本由查询模块编译产生，本模块只负责传输和响应封套解码。

use crate::error::{Error, Result};
use crate::query::{compile, Graph, Path};
use crate::rdf::Term;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// 默认服务地址
pub const DEFAULT_URL: &str = "http://localhost:64210";

/// execute 使用的默认结果上限
const DEFAULT_QUERY_LIMIT: i64 = 100;

/// 查询语言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Gizmo,
    GraphQl,
    Mql,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Gizmo => "gizmo",
            Language::GraphQl => "graphql",
            Language::Mql => "mql",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Gizmo
    }
}

/// 数据格式 (Content-Type / Accept)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    NQuads,
    Turtle,
    JsonLd,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::NQuads => "application/n-quads",
            Format::Turtle => "text/turtle",
            Format::JsonLd => "application/ld+json",
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::JsonLd
    }
}

/// 查询响应封套
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub error: Option<String>,
    pub result: Option<Vec<serde_json::Value>>,
}

/// Cayley 客户端
///
/// 持有查询入口 [`Graph`] 和底层 HTTP 连接，所有请求方法都是异步的。
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
    graph: Graph,
}

impl Client {
    /// 连接到指定地址的 Cayley 服务
    pub fn new(url: &str) -> Result<Self> {
        let base_url =
            Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Client {
            base_url,
            http: reqwest::Client::new(),
            graph: Graph::new(),
        })
    }

    /// 查询入口
    pub fn graph(&self) -> Graph {
        self.graph
    }

    /// graph 的简写
    pub fn g(&self) -> Graph {
        self.graph
    }

    /// 服务地址
    pub fn url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// 按主语/谓语/宾语/标签读取四元组，术语以 N-Quads 记号传递
    pub async fn read(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        label: Option<&Term>,
        format: Format,
    ) -> Result<String> {
        let mut url = self.endpoint("api/v2/read")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(term) = subject {
                pairs.append_pair("sub", &term.to_string());
            }
            if let Some(term) = predicate {
                pairs.append_pair("pred", &term.to_string());
            }
            if let Some(term) = object {
                pairs.append_pair("obj", &term.to_string());
            }
            if let Some(term) = label {
                pairs.append_pair("label", &term.to_string());
            }
        }

        debug!(url = %url, "读取四元组");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, format.as_str())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// 写入四元组数据
    pub async fn write(&self, text: &str, format: Format) -> Result<String> {
        self.post("api/v2/write", text, format).await
    }

    /// 删除四元组数据
    pub async fn delete(&self, text: &str, format: Format) -> Result<String> {
        self.post("api/v2/delete", text, format).await
    }

    async fn post(&self, path: &str, text: &str, format: Format) -> Result<String> {
        let url = self.endpoint(path)?;
        debug!(url = %url, bytes = text.len(), "提交四元组");
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, format.as_str())
            .body(text.to_string())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// 执行查询文本，返回响应封套
    pub async fn query(
        &self,
        query: &str,
        language: Language,
        limit: i64,
    ) -> Result<QueryResponse> {
        let mut url = self.endpoint("api/v2/query")?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("lang", language.as_str())
            .append_pair("limit", &limit.to_string());

        debug!(url = %url, "执行查询");
        let response = self.http.get(url).send().await?;
        Ok(response.json::<QueryResponse>().await?)
    }

    /// 编译并执行查询路径，封套中的 error 字段转为 [`Error::RemoteError`]
    pub async fn execute(&self, path: &Path) -> Result<Vec<serde_json::Value>> {
        let text = compile(path)?;
        let response = self.query(&text, Language::Gizmo, DEFAULT_QUERY_LIMIT).await?;
        if let Some(error) = response.error {
            return Err(Error::RemoteError(error));
        }
        response
            .result
            .ok_or_else(|| Error::InvalidResponse("响应缺少 result 字段".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_and_format_tokens() {
        assert_eq!(Language::Gizmo.as_str(), "gizmo");
        assert_eq!(Language::GraphQl.as_str(), "graphql");
        assert_eq!(Language::Mql.as_str(), "mql");
        assert_eq!(Format::NQuads.as_str(), "application/n-quads");
        assert_eq!(Format::Turtle.as_str(), "text/turtle");
        assert_eq!(Format::JsonLd.as_str(), "application/ld+json");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(Client::new("not a url").is_err());
        assert!(Client::new(DEFAULT_URL).is_ok());
    }

    #[test]
    fn test_query_response_envelope_decoding() {
        let ok: QueryResponse =
            serde_json::from_str(r#"{"result":[{"id":"<alice>"}]}"#).unwrap();
        assert!(ok.error.is_none());
        assert_eq!(ok.result.unwrap().len(), 1);

        let err: QueryResponse =
            serde_json::from_str(r#"{"error":"syntax error"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("syntax error"));
        assert!(err.result.is_none());
    }

    #[tokio::test]
    async fn test_execute_surfaces_transport_errors() {
        // 端口 1 上没有服务，连接必然失败
        let client = Client::new("http://127.0.0.1:1").unwrap();
        let g = client.g();
        let result = client.execute(&g.v::<&str, _>([]).all()).await;
        assert!(matches!(result, Err(Error::HttpError(_))));
    }
}
