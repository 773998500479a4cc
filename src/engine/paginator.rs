// ==========================================
// 窗帘墙纸报价系统 - 分页引擎
// ==========================================
// 职责: 把文档行按版面权重装入定容页
// 规则: 首页容量 17 (有客户信息块), 续页 23;
//       贪心装填, 任何页至少放一行 (超重行单独成页);
//       跨页维护累计金额 (承前页/转后页)
// ==========================================

use crate::domain::calculation::PricingResult;
use crate::domain::document::{LineKind, QuotationLine};
use serde::{Deserialize, Serialize};

/// 首页版面容量 (权重单位)
pub const FIRST_PAGE_CAPACITY: f64 = 17.0;
/// 续页版面容量 (无客户信息块, 空间更大)
pub const CONTINUATION_PAGE_CAPACITY: f64 = 23.0;

// ==========================================
// PaginatedPage - 分页结果 (单页)
// ==========================================
// brought_forward: 上页末的累计金额 (首页无);
// carried_forward: 本页末的累计金额 (末页无, 末页放汇总块)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPage {
    pub lines: Vec<QuotationLine>,    // 本页内容行
    pub brought_forward: Option<i64>, // 承前页累计 (铢)
    pub carried_forward: Option<i64>, // 转后页累计 (铢)
}

// ==========================================
// Paginator - 分页引擎
// ==========================================
pub struct Paginator {
    first_page_capacity: f64,
    continuation_capacity: f64,
}

impl Paginator {
    /// 创建分页引擎 (标准 A4 报价单版面)
    pub fn new() -> Self {
        Self {
            first_page_capacity: FIRST_PAGE_CAPACITY,
            continuation_capacity: CONTINUATION_PAGE_CAPACITY,
        }
    }

    /// 自定义容量 (测试或非标准纸型)
    pub fn with_capacities(first: f64, continuation: f64) -> Self {
        Self {
            first_page_capacity: first,
            continuation_capacity: continuation,
        }
    }

    /// 贪心分页
    ///
    /// 放行前检查: 当前权重 + 行权重超容且本页已有行时
    /// 先关页再起新页; 因此不会出现空页, 超重行也不会被丢弃
    pub fn paginate(&self, lines: Vec<QuotationLine>) -> Vec<PaginatedPage> {
        let mut pages: Vec<PaginatedPage> = Vec::new();
        let mut current: Vec<QuotationLine> = Vec::new();
        let mut current_weight = 0.0;
        let mut capacity = self.first_page_capacity;

        // 累计金额按文档顺序跑在所有计价行上, 标题行计 0
        let mut cumulative: i64 = 0;
        let mut brought_forward: Option<i64> = None;

        for line in lines {
            if current_weight + line.weight > capacity && !current.is_empty() {
                pages.push(PaginatedPage {
                    lines: std::mem::take(&mut current),
                    brought_forward,
                    carried_forward: Some(cumulative),
                });
                brought_forward = Some(cumulative);
                current_weight = 0.0;
                capacity = self.continuation_capacity;
            }

            if line.kind == LineKind::Row {
                cumulative += line.line_total;
            }
            current_weight += line.weight;
            current.push(line);
        }

        if !current.is_empty() {
            pages.push(PaginatedPage {
                lines: current,
                brought_forward,
                carried_forward: None,
            });
        }

        tracing::debug!(pages = pages.len(), total = cumulative, "分页完成");
        pages
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

/// 校验分页不变式: 每页行合计 + 承前页 == 转后页 (末页为全单合计)
///
/// 调试用途, 也被集成测试复用
pub fn verify_carry_chain(pages: &[PaginatedPage], result: &PricingResult) -> bool {
    let mut running: i64 = 0;
    for (idx, page) in pages.iter().enumerate() {
        // 承前页必须等于上页转后页
        let expected_brought = if idx == 0 { None } else { Some(running) };
        if page.brought_forward != expected_brought {
            return false;
        }

        running += page
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::Row)
            .map(|l| l.line_total)
            .sum::<i64>();

        let is_last = idx + 1 == pages.len();
        let expected_carried = if is_last { None } else { Some(running) };
        if page.carried_forward != expected_carried {
            return false;
        }
    }
    running == result.summary.grand_total
}
