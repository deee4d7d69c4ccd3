//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录、登出、当前用户、员工账号
//! - [`menu`] - 菜单管理接口
//! - [`tables`] - 桌台管理接口
//! - [`orders`] - 订单管理接口 (含厨房队列)
//! - [`reports`] - 报表接口

pub mod auth;
pub mod health;

// Data models API
pub mod menu;
pub mod orders;
pub mod reports;
pub mod tables;
