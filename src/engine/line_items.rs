// ==========================================
// 窗帘墙纸报价系统 - 文档行构建器
// ==========================================
// 职责: 把计价结果摊平成有序文档行 (房间标题 + 条目行)
// 规则: 挂起房间/条目和 0 元条目不上报价单;
//       只有存在有效条目的房间才输出标题行
// ==========================================

use crate::domain::calculation::{ItemCalculation, PricingResult};
use crate::domain::document::{
    LineKind, QuotationLine, SINGLE_LINE_WEIGHT, TWO_LINE_WEIGHT,
};
use crate::domain::quote::{Quote, Room};

/// 描述列单行可容纳的字符数 (含泰文组合符), 超出即换行 (权重 1.5)
const SINGLE_LINE_CHARS: usize = 56;

// ==========================================
// LineItemBuilder - 文档行构建器
// ==========================================
pub struct LineItemBuilder;

impl LineItemBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self
    }

    /// 摊平整份快照为文档行序列 (文档顺序 = 快照顺序)
    pub fn build(&self, quote: &Quote, result: &PricingResult) -> Vec<QuotationLine> {
        let mut lines = Vec::new();

        for room in &quote.rooms {
            if room.is_suspended {
                continue;
            }
            let room_lines = self.build_room(room, result);
            if room_lines.is_empty() {
                continue;
            }
            lines.push(QuotationLine::room_header(&room.name));
            lines.extend(room_lines);
        }

        lines
    }

    /// 单房间条目行 (不含标题行)
    fn build_room(&self, room: &Room, result: &PricingResult) -> Vec<QuotationLine> {
        let mut lines = Vec::new();

        for set in &room.sets {
            let Some(ItemCalculation::CurtainSet(calc)) = result.items.get(&set.id) else {
                continue;
            };
            if calc.total <= 0 {
                continue;
            }
            let mut description = format!(
                "ผ้าม่าน{} {} กว้าง {:.2} ม. สูง {:.2} ม.",
                set.style, set.fabric_variant, set.width_m, set.height_m
            );
            if !set.fabric_code.is_empty() {
                description.push_str(&format!(" ({})", set.fabric_code));
            }
            lines.push(Self::row(description, &set.notes, "ชุด", 1.0, calc.total, calc.total));
        }

        for decoration in &room.decorations {
            let Some(ItemCalculation::Decoration(calc)) = result.items.get(&decoration.id)
            else {
                continue;
            };
            if calc.total <= 0 {
                continue;
            }
            let mut description = format!(
                "{} กว้าง {:.2} ม. สูง {:.2} ม.",
                decoration.decoration_type, decoration.width_m, decoration.height_m
            );
            if !decoration.code.is_empty() {
                description.push_str(&format!(" ({})", decoration.code));
            }
            lines.push(Self::row(
                description,
                &decoration.notes,
                "ตร.หลา",
                calc.area_sq_yd,
                decoration.price_per_sq_yd.round() as i64,
                calc.total,
            ));
        }

        for wallpaper in &room.wallpapers {
            let Some(ItemCalculation::Wallpaper(calc)) = result.items.get(&wallpaper.id) else {
                continue;
            };
            if calc.total <= 0 {
                continue;
            }
            let mut description = format!(
                "วอลเปเปอร์ สูง {:.2} ม. รวมกว้าง {:.2} ม.",
                wallpaper.height_m,
                wallpaper.total_width_m()
            );
            if !wallpaper.code.is_empty() {
                description.push_str(&format!(" ({})", wallpaper.code));
            }
            let unit_price =
                (wallpaper.price_per_roll + wallpaper.install_cost_per_roll).round() as i64;
            lines.push(Self::row(
                description,
                &wallpaper.notes,
                "ม้วน",
                calc.rolls.count() as f64,
                unit_price,
                calc.total,
            ));
        }

        lines
    }

    /// 条目行, 权重按是否换行取 1.0 / 1.5
    fn row(
        description: String,
        notes: &str,
        unit_label: &str,
        quantity: f64,
        unit_price: i64,
        line_total: i64,
    ) -> QuotationLine {
        let two_line = !notes.is_empty() || description.chars().count() > SINGLE_LINE_CHARS;
        QuotationLine {
            kind: LineKind::Row,
            description,
            detail: notes.to_string(),
            unit_label: unit_label.to_string(),
            quantity,
            unit_price,
            line_total,
            weight: if two_line {
                TWO_LINE_WEIGHT
            } else {
                SINGLE_LINE_WEIGHT
            },
        }
    }
}

impl Default for LineItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
