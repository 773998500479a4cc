// ==========================================
// 窗帘墙纸报价系统 - 配置层
// ==========================================
// 职责: 计价配置与店铺信息, 显式传入每次计算
// 红线: 不做进程级全局配置, 保证计算可并行测试
// ==========================================

pub mod pricing_profile;
pub mod shop_profile;

// 重导出核心配置类型
pub use pricing_profile::{HeightTier, PricingProfile, StyleSurcharge, DEFAULT_VAT_RATE};
pub use shop_profile::ShopProfile;
