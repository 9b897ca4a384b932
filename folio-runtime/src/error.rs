//! # Error 模块
//!
//! 定义 folio-runtime 中使用的错误类型。
//!
//! 动画相关操作（注册揭示、调度时间轴、跳转锚点）在目标不存在时是静默空操作，
//! 不会出现在这里；这里只有配置加载和表单提交两类可恢复错误。

use thiserror::Error;

use crate::contact::ContactField;

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// JSON 解析失败
    #[error("配置解析失败: {message}")]
    Parse { message: String },

    /// 必填字段为空
    #[error("字段 '{field}' 不能为空")]
    EmptyField { field: String },

    /// 项目标题重复
    #[error("项目标题重复: '{title}'")]
    DuplicateProject { title: String },

    /// 链接格式无效
    #[error("字段 '{field}' 的链接无效: '{url}'")]
    InvalidLink { field: String, url: String },

    /// 动效参数无效
    #[error("动效参数 '{field}' 无效: {message}")]
    InvalidMotion { field: String, message: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// 联系表单错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// 必填字段为空
    #[error("必填字段 '{field}' 为空")]
    MissingField { field: ContactField },
}

/// folio-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 表单错误
    #[error("表单错误: {0}")]
    Form(#[from] FormError),
}

/// Result 类型别名
pub type FolioResult<T> = Result<T, FolioError>;
