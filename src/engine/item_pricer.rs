// ==========================================
// 窗帘墙纸报价系统 - 条目计价引擎
// ==========================================
// 职责: 单条目 (窗帘套装/装饰件/墙纸) 的价格与用料计算
// 红线: 无状态纯函数, 绝不修改输入
// 规则: 挂起判定最先执行, 挂起条目不进公式直接全 0
// ==========================================

use crate::config::PricingProfile;
use crate::domain::calculation::{
    CurtainSetCalculation, DecorationCalculation, RollRequirement, WallpaperCalculation,
};
use crate::domain::quote::{CurtainSet, Decoration, Wallpaper};
use crate::domain::types::CurtainStyle;

// ===== 用料常数 =====
/// 平方米 -> 平方码
pub const SQM_TO_SQYD: f64 = 1.19599;
/// 布料幅宽 (米)
const FABRIC_WIDTH_M: f64 = 0.9;
/// 收边余量 (米)
const HEM_ALLOWANCE_M: f64 = 0.6;
/// 打褶/孔眼款式褶皱倍率
const FULLNESS_PLEATED: f64 = 2.0;
/// 波浪款式褶皱倍率
const FULLNESS_WAVE: f64 = 2.6;

// ==========================================
// ItemPricer - 条目计价引擎
// ==========================================
pub struct ItemPricer;

impl ItemPricer {
    // ==========================================
    // 窗帘套装
    // ==========================================

    /// 计算窗帘套装价格与用料
    ///
    /// 单侧价格 = round((布料单价 + 款式加价 + 高度加价) * 宽度);
    /// 布料码数与价格独立, 仅由款式和宽度决定;
    /// 配置了组合但单价 <= 0 的一侧按 "未计价" 处理 (全 0, 不报错)
    ///
    /// # 参数
    /// - `room_suspended`: 所在房间的挂起标志 (向下级联)
    pub fn price_curtain_set(
        profile: &PricingProfile,
        set: &CurtainSet,
        room_suspended: bool,
    ) -> CurtainSetCalculation {
        if room_suspended || set.is_suspended {
            return CurtainSetCalculation::default();
        }
        if set.width_m <= 0.0 || set.height_m <= 0.0 {
            return CurtainSetCalculation::default();
        }

        let surcharge = super::PricingRules::style_surcharge(profile, set.style)
            + super::PricingRules::height_surcharge(profile, set.height_m);

        let mut calc = CurtainSetCalculation::default();

        if set.fabric_variant.has_opaque() && set.opaque_price_per_m > 0.0 {
            calc.opaque_price =
                ((set.opaque_price_per_m + surcharge as f64) * set.width_m).round() as i64;
            calc.opaque_yards = Self::fabric_yards(set.style, set.width_m);
            calc.opaque_track_m = set.width_m;
        }

        if set.fabric_variant.has_sheer() && set.sheer_price_per_m > 0.0 {
            calc.sheer_price =
                ((set.sheer_price_per_m + surcharge as f64) * set.width_m).round() as i64;
            calc.sheer_yards = Self::fabric_yards(set.style, set.width_m);
            calc.sheer_track_m = set.width_m;
        }

        calc.total = calc.opaque_price + calc.sheer_price;
        calc
    }

    /// 布料用量 (码)
    ///
    /// 幅宽 0.9 米竖幅拼接: (宽 * 褶皱倍率 + 收边) / 幅宽;
    /// 未知款式不计用料
    fn fabric_yards(style: CurtainStyle, width_m: f64) -> f64 {
        match style {
            CurtainStyle::Eyelet | CurtainStyle::Pleat => {
                (width_m * FULLNESS_PLEATED + HEM_ALLOWANCE_M) / FABRIC_WIDTH_M
            }
            CurtainStyle::Wave => (width_m * FULLNESS_WAVE + HEM_ALLOWANCE_M) / FABRIC_WIDTH_M,
            CurtainStyle::Unknown => 0.0,
        }
    }

    // ==========================================
    // 装饰件
    // ==========================================

    /// 计算装饰件价格 (按平方码面积)
    pub fn price_decoration(
        decoration: &Decoration,
        room_suspended: bool,
    ) -> DecorationCalculation {
        if room_suspended || decoration.is_suspended {
            return DecorationCalculation::default();
        }
        if decoration.width_m <= 0.0 || decoration.height_m <= 0.0 {
            return DecorationCalculation::default();
        }

        // 负单价按未计价处理, 不得产生负金额
        let price_per_sq_yd = decoration.price_per_sq_yd.max(0.0);
        let area_sq_yd = decoration.width_m * decoration.height_m * SQM_TO_SQYD;
        DecorationCalculation {
            area_sq_yd,
            total: (area_sq_yd * price_per_sq_yd).round() as i64,
        }
    }

    // ==========================================
    // 墙纸
    // ==========================================

    /// 计算墙纸卷数与价格 (竖条裁切)
    ///
    /// 每卷长 roll_length_m, 竖条宽 strip_width_m;
    /// 矮墙 (高 <= short_wall_cutoff_m) 按惯例每卷 3 条;
    /// 高墙每卷 floor(卷长 / 墙高) 条, 为 0 时整条裁不出,
    /// 判为不可施工并显式传播, 不得按 0 元静默计价。
    /// area_sq_m 仅供展示, 不参与卷数计算
    pub fn price_wallpaper(
        profile: &PricingProfile,
        wallpaper: &Wallpaper,
        room_suspended: bool,
    ) -> WallpaperCalculation {
        if room_suspended || wallpaper.is_suspended {
            return WallpaperCalculation::default();
        }

        let total_width_m = wallpaper.total_width_m();
        if total_width_m <= 0.0 || wallpaper.height_m <= 0.0 {
            return WallpaperCalculation::default();
        }

        let area_sq_m = total_width_m * wallpaper.height_m;

        let strips_per_roll = if wallpaper.height_m > profile.short_wall_cutoff_m {
            (profile.roll_length_m / wallpaper.height_m).floor() as u32
        } else {
            profile.short_wall_strips_per_roll
        };

        if strips_per_roll == 0 {
            return WallpaperCalculation {
                area_sq_m,
                rolls: RollRequirement::Infeasible,
                material_price: 0,
                install_price: 0,
                total: 0,
            };
        }

        let strips_needed = (total_width_m / profile.strip_width_m).ceil() as u32;
        let rolls_needed = strips_needed.div_ceil(strips_per_roll);

        // 负单价按未计价处理, 卷数照算, 金额不得为负
        let price_per_roll = wallpaper.price_per_roll.max(0.0);
        let install_cost_per_roll = wallpaper.install_cost_per_roll.max(0.0);
        let material_price = (rolls_needed as f64 * price_per_roll).round() as i64;
        let install_price = (rolls_needed as f64 * install_cost_per_roll).round() as i64;

        WallpaperCalculation {
            area_sq_m,
            rolls: RollRequirement::Rolls(rolls_needed),
            material_price,
            install_price,
            total: material_price + install_price,
        }
    }
}
