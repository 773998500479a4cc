// ==========================================
// 窗帘墙纸报价系统 - 引擎层
// ==========================================
// 职责: 计价/汇总/分页/装配的业务规则
// 红线: 引擎全部无状态, 同一快照两次计算输出逐字节一致
// ==========================================

pub mod aggregation;
pub mod assembler;
pub mod bahttext;
pub mod error;
pub mod item_pricer;
pub mod line_items;
pub mod paginator;
pub mod pricing_rules;
pub mod render;

// 重导出核心引擎
pub use aggregation::AggregationEngine;
pub use assembler::{DocumentOptions, QuotationAssembler};
pub use error::{EngineError, EngineResult};
pub use item_pricer::ItemPricer;
pub use line_items::LineItemBuilder;
pub use paginator::{PaginatedPage, Paginator};
pub use pricing_rules::PricingRules;
pub use render::{NoOpRenderer, QuotationRenderer};
