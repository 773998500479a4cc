// ==========================================
// 窗帘墙纸报价系统 - 核心库
// ==========================================
// 技术栈: Rust + serde (JSON 快照契约)
// 系统定位: 纯计算引擎 (UI/存储/渲染均为外部协作方)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 快照与结果模型
pub mod domain;

// 配置层 - 计价配置与店铺信息
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CurtainStyle, FabricVariant};

// 领域实体
pub use domain::{
    CurtainSet, Decoration, DocumentModel, ItemCalculation, PricingResult, Quote, QuoteSummary,
    RollRequirement, Room, Wallpaper,
};

// 配置
pub use config::{PricingProfile, ShopProfile, DEFAULT_VAT_RATE};

// 引擎
pub use engine::{
    AggregationEngine, DocumentOptions, EngineError, EngineResult, ItemPricer, LineItemBuilder,
    NoOpRenderer, Paginator, PricingRules, QuotationAssembler, QuotationRenderer,
};

// API
pub use api::QuotationApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "窗帘墙纸报价系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
