// ==========================================
// 窗帘墙纸报价系统 - 计价规则
// ==========================================
// 职责: 款式加价查表 / 高度加价阶梯判定
// 红线: 无状态, 所有方法都是纯函数
// ==========================================

use crate::config::PricingProfile;
use crate::domain::types::CurtainStyle;

// ==========================================
// PricingRules - 计价规则
// ==========================================
pub struct PricingRules;

impl PricingRules {
    /// 款式加价 (铢/米)
    ///
    /// 查表, 未配置的款式返回 0
    pub fn style_surcharge(profile: &PricingProfile, style: CurtainStyle) -> i64 {
        profile
            .style_surcharges
            .iter()
            .find(|s| s.style == style)
            .map(|s| s.add_per_m)
            .unwrap_or(0)
    }

    /// 高度加价 (铢/米)
    ///
    /// 阶梯按阈值降序评估, 返回第一个被严格超过的
    /// 档位加价; 高度同时越过多档时取最高档, 不取最低档
    ///
    /// # 参数
    /// - `height_m`: 窗高 (米)
    ///
    /// # 返回
    /// 每米加价 (铢), 未命中任何档位返回 0
    pub fn height_surcharge(profile: &PricingProfile, height_m: f64) -> i64 {
        let mut tiers: Vec<_> = profile.height_tiers.iter().collect();
        tiers.sort_by(|a, b| {
            b.threshold_m
                .partial_cmp(&a.threshold_m)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tiers
            .into_iter()
            .find(|t| height_m > t.threshold_m)
            .map(|t| t.add_per_m)
            .unwrap_or(0)
    }
}
