//! SchoolSys - 学校教务管理平台后端服务
//!
//! 基于 Actix Web 构建的角色化教务管理系统后端，覆盖用户（管理员/教师/家长/学生）、
//! 科目、班组、课次与考勤，并提供 JWT 认证。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis），仅用于认证中间件的用户查找
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
