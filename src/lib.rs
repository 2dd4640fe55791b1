//! # Annotation Tool Gen
//!
//! 一个用于生成题面歧义标注工具的 Rust 应用程序
//!
//! 读取题目 JSONL 文件，生成静态的浏览器端标注网站；同时把标注
//! 工作流本身实现为可测试的 Rust 库，浏览器端脚本与库遵循同一套
//! 存储/导航/导出契约。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有存储资源，只暴露能力
//! - `StoragePort` - 持久化端口（load / save 一个数据块）
//! - `FileStorage` / `MemoryStorage` - 文件与内存两种端口实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `AnnotationStore` - 标注的追加 / 覆盖 / 删除 / 遍历能力
//! - `exporter` - JSONL 导出能力
//! - `renderer` - 状态到展示模型的渲染能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次标注会话"的完整状态机
//! - `Selection` - 新建 / 编辑选择状态
//! - `AnnotationSession` - 导航、保存、删除、导出的状态衔接
//!
//! ### ④ 应用层（App / Generator）
//! - `generator/` - 模板渲染与静态文件写出
//! - `app` - 加载题目并生成网站的主流程
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use generator::SiteGenerator;
pub use infrastructure::{FileStorage, MemoryStorage, StoragePort};
pub use models::{AmbiguityKeyword, Annotation, AnnotationForm, Problem, QaPair};
pub use services::AnnotationStore;
pub use workflow::{AnnotationSession, Selection};
