//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("查询编译错误: 步骤 {step} 的第 {position} 个参数: {reason}")]
    CompileError {
        step: String,
        position: usize,
        reason: String,
    },

    #[error("远程执行错误: {0}")]
    RemoteError(String),

    #[error("响应格式错误: {0}")]
    InvalidResponse(String),

    #[error("无效的服务地址: {0}")]
    InvalidUrl(String),

    #[error("HTTP 传输错误: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
