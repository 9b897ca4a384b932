//! # Config 模块
//!
//! 站点内容与动效参数。
//!
//! ## 配置优先级
//!
//! 1. JSON 中显式给出的值（最高）
//! 2. 默认值（最低）
//!
//! 站点文本全部来自 [`SiteConfig`]（宿主在构建期嵌入 `content/site.json`），
//! 动效时长等常量来自 [`MotionConfig`]。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// 站点内容配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// 站点主人姓名
    pub name: String,

    /// 导航栏 Logo 缩写
    #[serde(default)]
    pub initials: String,

    /// 首屏职位标题
    pub role: String,

    /// 首屏副标题
    #[serde(default)]
    pub subtitle: String,

    /// About 段落
    #[serde(default)]
    pub about: Vec<String>,

    /// 头像路径
    #[serde(default = "default_portrait")]
    pub portrait: String,

    /// 技术技能
    #[serde(default)]
    pub skills: Vec<Skill>,

    /// 软技能
    #[serde(default)]
    pub soft_skills: Vec<String>,

    /// 项目列表
    #[serde(default)]
    pub projects: Vec<Project>,

    /// 联系方式
    #[serde(default)]
    pub contact: ContactInfo,

    /// 社交链接
    #[serde(default)]
    pub socials: Vec<SocialLink>,

    /// 简历链接
    #[serde(default)]
    pub resume_url: Option<String>,

    /// 首屏 3D 面板地址（对核心不透明）
    #[serde(default)]
    pub embed_url: Option<String>,

    /// 页脚简介
    #[serde(default)]
    pub tagline: String,

    /// 动效参数
    #[serde(default)]
    pub motion: MotionConfig,
}

/// 技能
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 图标名（由宿主映射为具体图形）
    #[serde(default = "default_skill_icon")]
    pub icon: String,
    /// 配色
    #[serde(default)]
    pub tone: Tone,
}

/// 配色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl Tone {
    /// 对应的 CSS 类名
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "text-primary",
            Self::Secondary => "text-secondary",
            Self::Accent => "text-accent",
        }
    }
}

/// 项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// 封面图路径
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_project_icon")]
    pub icon: String,
}

/// 联系方式
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub availability: String,
}

impl ContactInfo {
    /// `mailto:` 链接
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` 链接（去掉空格）
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

/// 社交链接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// 显示名，例如 "LinkedIn"
    pub label: String,
    pub url: String,
    #[serde(default = "default_social_icon")]
    pub icon: String,
}

/// 动效参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// 加载进度动画时长（秒）
    #[serde(default = "default_progress_duration")]
    pub progress_duration: f32,

    /// 启动画面淡出时长（秒）
    #[serde(default = "default_fade_duration")]
    pub fade_duration: f32,

    /// 启动画面淡出终点缩放
    #[serde(default = "default_fade_scale")]
    pub fade_scale: f32,

    /// 首屏时间轴延迟（秒）
    #[serde(default = "default_hero_delay")]
    pub hero_delay: f32,

    /// 导航栏切换为磨砂样式的滚动阈值（px）
    #[serde(default = "default_nav_threshold")]
    pub nav_threshold: f32,

    /// 提示显示时长（秒）
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,

    /// 帧间隔超过该值视为卡顿（毫秒）
    #[serde(default = "default_lag_threshold_ms")]
    pub lag_threshold_ms: f64,

    /// 卡顿帧替换成的步长（毫秒）
    #[serde(default = "default_lag_adjusted_ms")]
    pub lag_adjusted_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            progress_duration: default_progress_duration(),
            fade_duration: default_fade_duration(),
            fade_scale: default_fade_scale(),
            hero_delay: default_hero_delay(),
            nav_threshold: default_nav_threshold(),
            toast_duration: default_toast_duration(),
            lag_threshold_ms: default_lag_threshold_ms(),
            lag_adjusted_ms: default_lag_adjusted_ms(),
        }
    }
}

// 默认值函数
fn default_portrait() -> String {
    "images/profile.jpg".to_string()
}

fn default_skill_icon() -> String {
    "code".to_string()
}

fn default_project_icon() -> String {
    "chart-bar".to_string()
}

fn default_social_icon() -> String {
    "link".to_string()
}

fn default_progress_duration() -> f32 {
    2.5
}

fn default_fade_duration() -> f32 {
    1.0
}

fn default_fade_scale() -> f32 {
    0.9
}

fn default_hero_delay() -> f32 {
    0.5
}

fn default_nav_threshold() -> f32 {
    50.0
}

fn default_toast_duration() -> f32 {
    4.0
}

fn default_lag_threshold_ms() -> f64 {
    500.0
}

fn default_lag_adjusted_ms() -> f64 {
    33.0
}

impl SiteConfig {
    /// 从 JSON 解析
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 解析并验证，失败时回退到默认内容
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json).and_then(|config| config.validate().map(|()| config)) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "站点配置无效，使用默认内容");
                Self::default()
            }
        }
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("name", &self.name), ("role", &self.role)] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    field: field.to_string(),
                });
            }
        }

        let mut titles = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    field: "projects.title".to_string(),
                });
            }
            if !titles.insert(project.title.as_str()) {
                return Err(ConfigError::DuplicateProject {
                    title: project.title.clone(),
                });
            }
        }

        for social in &self.socials {
            check_link(&format!("socials.{}", social.label), &social.url)?;
        }
        if let Some(url) = &self.resume_url {
            check_link("resume_url", url)?;
        }
        if let Some(url) = &self.embed_url
            && !url.starts_with("https://")
        {
            return Err(ConfigError::InvalidLink {
                field: "embed_url".to_string(),
                url: url.clone(),
            });
        }
        if !self.contact.email.is_empty() && !self.contact.email.contains('@') {
            return Err(ConfigError::InvalidLink {
                field: "contact.email".to_string(),
                url: self.contact.email.clone(),
            });
        }

        self.motion.validate()
    }

    /// 导航栏 Logo：未配置缩写时取姓名各词首字母
    pub fn logo(&self) -> String {
        if !self.initials.is_empty() {
            return self.initials.clone();
        }
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// 站外链接和站内相对路径都可以，空串和带空白的不行
fn check_link(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.trim().is_empty() || url.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidLink {
            field: field.to_string(),
            url: url.to_string(),
        });
    }
    Ok(())
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            initials: String::new(),
            role: "Developer".to_string(),
            subtitle: String::new(),
            about: Vec::new(),
            portrait: default_portrait(),
            skills: Vec::new(),
            soft_skills: Vec::new(),
            projects: Vec::new(),
            contact: ContactInfo::default(),
            socials: Vec::new(),
            resume_url: None,
            embed_url: None,
            tagline: String::new(),
            motion: MotionConfig::default(),
        }
    }
}

impl MotionConfig {
    /// 验证动效参数
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("progress_duration", self.progress_duration),
            ("fade_duration", self.fade_duration),
            ("hero_delay", self.hero_delay),
            ("nav_threshold", self.nav_threshold),
            ("toast_duration", self.toast_duration),
        ];
        for (field, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMotion {
                    field: field.to_string(),
                    message: format!("必须是非负有限数，实际为 {value}"),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.fade_scale) {
            return Err(ConfigError::InvalidMotion {
                field: "fade_scale".to_string(),
                message: format!("必须在 0.0 - 1.0 之间，实际为 {}", self.fade_scale),
            });
        }

        if !(self.lag_adjusted_ms > 0.0 && self.lag_adjusted_ms <= self.lag_threshold_ms) {
            return Err(ConfigError::InvalidMotion {
                field: "lag_adjusted_ms".to_string(),
                message: "必须大于 0 且不超过 lag_threshold_ms".to_string(),
            });
        }

        Ok(())
    }
}
