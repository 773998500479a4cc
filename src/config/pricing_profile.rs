// ==========================================
// 窗帘墙纸报价系统 - 计价配置
// ==========================================
// 职责: 款式加价表 / 高度加价阶梯 / 墙纸卷规格 / 税率
// 红线: 配置显式传入引擎, 无进程级可变状态
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::CurtainStyle;

/// 缺省增值税率 (泰国 VAT 7%)
pub const DEFAULT_VAT_RATE: f64 = 0.07;

/// 款式加价 (铢/米, 叠加在布料单价上)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSurcharge {
    pub style: CurtainStyle, // 款式
    pub add_per_m: i64,      // 每米加价 (铢)
}

/// 高度加价阶梯
///
/// 窗高严格超过 threshold_m 时触发 add_per_m;
/// 评估时按阈值降序取第一个命中的档位
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightTier {
    pub threshold_m: f64, // 触发阈值 (米, 严格大于)
    pub add_per_m: i64,   // 每米加价 (铢)
}

/// 计价配置 (一次计算一份, 可持久化为 JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingProfile {
    /// 款式加价表
    #[serde(default)]
    pub style_surcharges: Vec<StyleSurcharge>,

    /// 高度加价阶梯 (存储顺序不限, 评估时排序)
    #[serde(default)]
    pub height_tiers: Vec<HeightTier>,

    /// 墙纸整卷长度 (米)
    #[serde(default = "default_roll_length")]
    pub roll_length_m: f64,

    /// 竖条可用宽度 (米/条)
    #[serde(default = "default_strip_width")]
    pub strip_width_m: f64,

    /// 矮墙高度界限 (米): 不超过此高度按惯例 3 条/卷
    #[serde(default = "default_short_wall_cutoff")]
    pub short_wall_cutoff_m: f64,

    /// 矮墙每卷裁条数 (惯例值)
    #[serde(default = "default_short_wall_strips")]
    pub short_wall_strips_per_roll: u32,

    /// 缺省税率
    #[serde(default = "default_vat_rate")]
    pub default_vat_rate: f64,
}

fn default_roll_length() -> f64 {
    10.0
}

fn default_strip_width() -> f64 {
    0.53
}

fn default_short_wall_cutoff() -> f64 {
    2.5
}

fn default_short_wall_strips() -> u32 {
    3
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

impl Default for PricingProfile {
    fn default() -> Self {
        Self {
            style_surcharges: vec![
                StyleSurcharge {
                    style: CurtainStyle::Wave,
                    add_per_m: 200,
                },
                StyleSurcharge {
                    style: CurtainStyle::Eyelet,
                    add_per_m: 100,
                },
                StyleSurcharge {
                    style: CurtainStyle::Pleat,
                    add_per_m: 0,
                },
            ],
            height_tiers: vec![
                HeightTier {
                    threshold_m: 3.2,
                    add_per_m: 300,
                },
                HeightTier {
                    threshold_m: 2.8,
                    add_per_m: 200,
                },
                HeightTier {
                    threshold_m: 2.5,
                    add_per_m: 100,
                },
            ],
            roll_length_m: default_roll_length(),
            strip_width_m: default_strip_width(),
            short_wall_cutoff_m: default_short_wall_cutoff(),
            short_wall_strips_per_roll: default_short_wall_strips(),
            default_vat_rate: default_vat_rate(),
        }
    }
}
