// ==========================================
// 窗帘墙纸报价系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供 CLI / 外部应用调用
// ==========================================

pub mod quotation_api;

// 重导出核心类型
pub use quotation_api::QuotationApi;
