//! Cayley Client - Cayley 图数据库 Rust 客户端
//!
//! 通过流式 API 构建 Gizmo 遍历表达式，支持：
//! - 不可变、前缀可复用的查询路径
//! - 确定性的查询文本编译
//! - Cayley REST API v2 异步传输（读写删除与查询执行）
//! - RDF 术语的 N-Quads 序列化

pub mod client;
pub mod error;
pub mod query;
pub mod rdf;

// 重导出常用类型
pub use client::{Client, Format, Language, QueryResponse, DEFAULT_URL};
pub use error::{Error, Result};
pub use query::{compile, like, regex, Arg, Call, Filter, Graph, Path, PathElement, Step, Via};
pub use rdf::{BlankNode, Literal, NamedNode, Term};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
