// ==========================================
// 窗帘墙纸报价系统 - 汇总引擎
// ==========================================
// 职责: 遍历快照 (房间 -> 条目), 逐条计价并汇总
// 输入: Quote 快照 + 计价配置
// 输出: 条目/房间/全单三级结果 + 用料汇总
// 红线: 每次全量重算, 无增量状态
// ==========================================

use std::collections::BTreeMap;

use crate::config::PricingProfile;
use crate::domain::calculation::{
    ItemCalculation, PricingResult, QuoteSummary, RoomCalculation,
};
use crate::domain::quote::{Quote, Room};
use crate::domain::types::FabricVariant;

use super::ItemPricer;

// ==========================================
// AggregationEngine - 汇总引擎
// ==========================================
pub struct AggregationEngine;

impl AggregationEngine {
    /// 创建新的汇总引擎
    pub fn new() -> Self {
        Self
    }

    /// 对整份快照执行一次计价
    ///
    /// 有效计价条目数只统计 total > 0 的条目;
    /// 双层支架标志只看未挂起的套装 (挂起条目不需要备料)
    pub fn price(&self, profile: &PricingProfile, quote: &Quote) -> PricingResult {
        let mut items: BTreeMap<String, ItemCalculation> = BTreeMap::new();
        let mut rooms: BTreeMap<String, RoomCalculation> = BTreeMap::new();
        let mut summary = QuoteSummary::default();

        for room in &quote.rooms {
            let room_calc = self.price_room(profile, room, &mut items, &mut summary);
            tracing::debug!(
                room = %room.name,
                subtotal = room_calc.subtotal,
                priced_items = room_calc.priced_item_count,
                "房间小计"
            );
            summary.grand_total += room_calc.subtotal;
            summary.priced_item_count += room_calc.priced_item_count;
            rooms.insert(room.id.clone(), room_calc);
        }

        tracing::info!(
            grand_total = summary.grand_total,
            priced_items = summary.priced_item_count,
            rooms = rooms.len(),
            "计价完成"
        );

        PricingResult {
            items,
            rooms,
            summary,
        }
    }

    /// 单个房间计价, 条目结果与用料直接累入全单
    fn price_room(
        &self,
        profile: &PricingProfile,
        room: &Room,
        items: &mut BTreeMap<String, ItemCalculation>,
        summary: &mut QuoteSummary,
    ) -> RoomCalculation {
        let mut room_calc = RoomCalculation {
            room_name: room.name.clone(),
            ..RoomCalculation::default()
        };

        for set in &room.sets {
            let calc = ItemPricer::price_curtain_set(profile, set, room.is_suspended);

            summary.opaque_fabric_yards += calc.opaque_yards;
            summary.sheer_fabric_yards += calc.sheer_yards;
            summary.opaque_track_m += calc.opaque_track_m;
            summary.sheer_track_m += calc.sheer_track_m;
            // 双层组合需要双层支架, 与价格是否为 0 无关
            if !room.is_suspended
                && !set.is_suspended
                && set.fabric_variant == FabricVariant::Both
            {
                summary.needs_double_bracket = true;
            }

            Self::account(&mut room_calc, calc.total);
            items.insert(set.id.clone(), ItemCalculation::CurtainSet(calc));
        }

        for decoration in &room.decorations {
            let calc = ItemPricer::price_decoration(decoration, room.is_suspended);
            if calc.total > 0 {
                *summary
                    .decoration_counts
                    .entry(decoration.decoration_type.clone())
                    .or_insert(0) += 1;
            }
            Self::account(&mut room_calc, calc.total);
            items.insert(decoration.id.clone(), ItemCalculation::Decoration(calc));
        }

        for wallpaper in &room.wallpapers {
            let calc = ItemPricer::price_wallpaper(profile, wallpaper, room.is_suspended);
            summary.wallpaper_rolls += calc.rolls.count();
            if calc.rolls.is_infeasible() {
                summary.infeasible_wallpaper_count += 1;
                tracing::warn!(
                    wallpaper_id = %wallpaper.id,
                    height_m = wallpaper.height_m,
                    "墙高超过整卷可裁长度, 条目不可施工"
                );
            }
            Self::account(&mut room_calc, calc.total);
            items.insert(wallpaper.id.clone(), ItemCalculation::Wallpaper(calc));
        }

        room_calc
    }

    fn account(room_calc: &mut RoomCalculation, total: i64) {
        room_calc.subtotal += total;
        if total > 0 {
            room_calc.priced_item_count += 1;
        }
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}
