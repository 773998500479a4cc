// ==========================================
// 窗帘墙纸报价系统 - 计算结果模型
// ==========================================
// 职责: 单条目计价结果 / 房间小计 / 全单汇总
// 红线: 结果只是快照的派生值, 不可反向污染输入
// 金额单位: 整数铢 (逐项四舍五入)
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// RollRequirement - 墙纸卷数结果
// ==========================================
// 墙高超过整卷可裁长度时为 Infeasible (不可施工),
// 必须显式传播, 不得静默按 0 元计价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RollRequirement {
    /// 可施工, 需要的整卷数
    Rolls(u32),
    /// 不可施工 (单条竖条都裁不出来)
    Infeasible,
}

impl RollRequirement {
    /// 是否不可施工
    pub fn is_infeasible(&self) -> bool {
        matches!(self, RollRequirement::Infeasible)
    }

    /// 卷数 (不可施工时为 0, 仅用于汇总累加)
    pub fn count(&self) -> u32 {
        match self {
            RollRequirement::Rolls(n) => *n,
            RollRequirement::Infeasible => 0,
        }
    }
}

// ==========================================
// 分类计算结果
// ==========================================

/// 窗帘套装计价结果
///
/// 价格按有效侧 (遮光布/纱帘) 分别计算再求和;
/// 布料码数与轨道长度是用料量, 与价格相互独立
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurtainSetCalculation {
    pub opaque_price: i64,  // 遮光布侧价格 (铢)
    pub sheer_price: i64,   // 纱帘侧价格 (铢)
    pub opaque_yards: f64,  // 遮光布用料 (码)
    pub sheer_yards: f64,   // 纱帘用料 (码)
    pub opaque_track_m: f64, // 遮光布轨道 (米)
    pub sheer_track_m: f64, // 纱帘轨道 (米)
    pub total: i64,         // 合计 (铢)
}

/// 装饰件计价结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DecorationCalculation {
    pub area_sq_yd: f64, // 面积 (平方码)
    pub total: i64,      // 合计 (铢)
}

/// 墙纸计价结果
///
/// area_sq_m 仅供参考展示, 卷数按竖条裁切计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperCalculation {
    pub area_sq_m: f64,          // 墙面面积 (平方米, 仅展示)
    pub rolls: RollRequirement,  // 需要卷数 (或不可施工)
    pub material_price: i64,     // 材料价 (铢)
    pub install_price: i64,      // 安装费 (铢)
    pub total: i64,              // 合计 (铢)
}

impl Default for WallpaperCalculation {
    fn default() -> Self {
        Self {
            area_sq_m: 0.0,
            rolls: RollRequirement::Rolls(0),
            material_price: 0,
            install_price: 0,
            total: 0,
        }
    }
}

// ==========================================
// ItemCalculation - 条目计价结果 (按类)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemCalculation {
    CurtainSet(CurtainSetCalculation),
    Decoration(DecorationCalculation),
    Wallpaper(WallpaperCalculation),
}

impl ItemCalculation {
    /// 条目合计金额 (铢)
    pub fn total(&self) -> i64 {
        match self {
            ItemCalculation::CurtainSet(c) => c.total,
            ItemCalculation::Decoration(c) => c.total,
            ItemCalculation::Wallpaper(c) => c.total,
        }
    }
}

// ==========================================
// RoomCalculation - 房间小计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomCalculation {
    pub room_name: String,      // 房间名称
    pub subtotal: i64,          // 房间小计 (铢)
    pub priced_item_count: u32, // 有效计价条目数 (total > 0)
}

// ==========================================
// QuoteSummary - 全单汇总
// ==========================================
// 用料汇总供备料单使用, 与报价金额并列输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub grand_total: i64,            // 全单合计 (铢, 不含税)
    pub priced_item_count: u32,      // 有效计价条目数
    pub opaque_fabric_yards: f64,    // 遮光布总用料 (码)
    pub sheer_fabric_yards: f64,     // 纱帘总用料 (码)
    pub opaque_track_m: f64,         // 遮光布轨道总长 (米)
    pub sheer_track_m: f64,          // 纱帘轨道总长 (米)
    pub wallpaper_rolls: u32,        // 墙纸总卷数
    pub decoration_counts: BTreeMap<String, u32>, // 各类装饰件数量
    pub needs_double_bracket: bool,  // 是否需要双层支架 (存在 ทึบ&โปร่ง 套装)
    pub infeasible_wallpaper_count: u32, // 不可施工墙纸条目数 (需人工处理)
}

// ==========================================
// PricingResult - 单次计算全量输出
// ==========================================
// BTreeMap 保证序列化顺序稳定: 同一快照两次计算
// 的输出逐字节一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub items: BTreeMap<String, ItemCalculation>, // 条目ID -> 计价结果
    pub rooms: BTreeMap<String, RoomCalculation>, // 房间ID -> 小计
    pub summary: QuoteSummary,                    // 全单汇总
}
