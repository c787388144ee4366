//! Gizmo 查询模块
//!
//! 流式查询构建器和确定性的查询文本编译器
//!
//! 主要特性:
//! - 不可变的路径值: 每个链式方法返回新的 Path，前缀可复用
//! - 完整的 Gizmo 遍历方法: out/in/both/has/follow/union/...
//! - Morphism 模板: 可作为参数复用的未锚定路径
//! - 全局调用与链式表达式的分段编译 (`;` 连接)
//! - 过滤器构造: regex, like

mod compile;
mod filter;
mod graph;
mod path;

// 导出查询模型
pub use path::{Arg, Call, Path, PathElement, Step, Via};

// 导出查询入口
pub use graph::Graph;

// 导出编译器
pub use compile::compile;

// 导出过滤器
pub use filter::{like, regex, Filter};
