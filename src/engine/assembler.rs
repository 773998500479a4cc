// ==========================================
// 窗帘墙纸报价系统 - 报价单装配引擎
// ==========================================
// 职责: 分页内容 + 抬头/汇总块 -> 最终文档模型
// 规则: 抬头仅首页, 汇总块仅末页;
//       税率 > 0 才打印税行, 大写金额取含税合计
// ==========================================

use chrono::Local;

use crate::config::ShopProfile;
use crate::domain::calculation::PricingResult;
use crate::domain::document::{DocumentHeader, DocumentModel, DocumentPage, SummaryBlock};
use crate::domain::quote::Quote;

use super::bahttext;
use super::paginator::PaginatedPage;

// ==========================================
// DocumentOptions - 出单选项
// ==========================================
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub vat_rate: f64, // 税率 (0 表示免税报价)
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            vat_rate: crate::config::DEFAULT_VAT_RATE,
        }
    }
}

// ==========================================
// QuotationAssembler - 装配引擎
// ==========================================
pub struct QuotationAssembler;

impl QuotationAssembler {
    /// 创建新的装配引擎
    pub fn new() -> Self {
        Self
    }

    /// 装配最终文档
    ///
    /// 全单合计为 0 时返回 None (无可开票内容,
    /// 调用方不得渲染空报价单)
    pub fn assemble(
        &self,
        quote: &Quote,
        result: &PricingResult,
        paged: Vec<PaginatedPage>,
        shop: &ShopProfile,
        options: &DocumentOptions,
    ) -> Option<DocumentModel> {
        let subtotal = result.summary.grand_total;
        if subtotal <= 0 || paged.is_empty() {
            return None;
        }

        let vat_amount = if options.vat_rate > 0.0 {
            Some((subtotal as f64 * options.vat_rate).round() as i64)
        } else {
            None
        };
        let grand_total = subtotal + vat_amount.unwrap_or(0);

        let summary = SummaryBlock {
            subtotal,
            vat_rate: options.vat_rate,
            vat_amount,
            grand_total,
            grand_total_words: bahttext::to_words(grand_total as f64),
        };

        let header = DocumentHeader {
            shop: shop.clone(),
            quote_no: quote.quote_no.clone().unwrap_or_default(),
            quote_date: quote
                .quote_date
                .unwrap_or_else(|| Local::now().date_naive()),
            customer_name: quote.customer_name.clone(),
            customer_phone: quote.customer_phone.clone(),
            customer_address: quote.customer_address.clone(),
        };

        let total_pages = paged.len() as u32;
        let pages = paged
            .into_iter()
            .enumerate()
            .map(|(idx, page)| {
                let page_no = idx as u32 + 1;
                DocumentPage {
                    page_no,
                    total_pages,
                    header: (page_no == 1).then(|| header.clone()),
                    lines: page.lines,
                    brought_forward: page.brought_forward,
                    carried_forward: page.carried_forward,
                    summary: (page_no == total_pages).then(|| summary.clone()),
                }
            })
            .collect();

        tracing::info!(
            pages = total_pages,
            subtotal,
            grand_total,
            "报价单装配完成"
        );

        Some(DocumentModel { pages })
    }
}

impl Default for QuotationAssembler {
    fn default() -> Self {
        Self::new()
    }
}
