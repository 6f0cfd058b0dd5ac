//! Peer Review - 学生作业互评系统
//!
//! 教师创建带评分标准的作业，学生提交作品，系统为每份提交自动分配固定数量的
//! 同伴评审人，评审人按评分标准打分。所有数据保存在本地键值存储中。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（评审分配、评审记录、视图）
//! - `storage`: 领域数据仓库
//! - `store`: 持久化键值存储（Moka/文件/Redis）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod store;
pub mod utils;
