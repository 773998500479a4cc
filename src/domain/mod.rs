// ==========================================
// 窗帘墙纸报价系统 - 领域层
// ==========================================
// 职责: 输入快照 / 计算结果 / 文档模型
// 红线: 纯数据结构, 不含业务规则
// ==========================================

pub mod calculation;
pub mod document;
pub mod quote;
pub mod types;

// 重导出核心类型
pub use calculation::{
    CurtainSetCalculation, DecorationCalculation, ItemCalculation, PricingResult, QuoteSummary,
    RollRequirement, RoomCalculation, WallpaperCalculation,
};
pub use document::{
    DocumentHeader, DocumentModel, DocumentPage, LineKind, QuotationLine, SummaryBlock,
};
pub use quote::{CurtainSet, Decoration, Quote, Room, Wallpaper};
pub use types::{CurtainStyle, FabricVariant};
