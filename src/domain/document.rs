// ==========================================
// 窗帘墙纸报价系统 - 报价单文档模型
// ==========================================
// 职责: 分页后的打印就绪结构, 交外部渲染服务
// 说明: 首页含店头/客户信息, 末页含汇总与大写金额
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ShopProfile;

// ==========================================
// QuotationLine - 文档行
// ==========================================

/// 文档行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    /// 房间分组标题行
    RoomHeader,
    /// 计价条目行
    Row,
}

// 版面权重: 模拟打印行高, 不是条目个数
pub const SINGLE_LINE_WEIGHT: f64 = 1.0; // 单行条目
pub const TWO_LINE_WEIGHT: f64 = 1.5; // 换行条目 (带备注或描述过长)
pub const ROOM_HEADER_WEIGHT: f64 = 1.2; // 房间标题行

/// 一行报价内容, weight 为版面占用权重
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLine {
    pub kind: LineKind,      // 行类型
    pub description: String, // 描述 (泰文)
    pub detail: String,      // 第二行明细 (备注, 可为空)
    pub unit_label: String,  // 单位 (ชุด/ตร.หลา/ม้วน)
    pub quantity: f64,       // 数量
    pub unit_price: i64,     // 单价 (铢)
    pub line_total: i64,     // 行合计 (铢, 标题行为 0)
    pub weight: f64,         // 版面权重
}

impl QuotationLine {
    /// 创建房间标题行
    pub fn room_header(name: &str) -> Self {
        Self {
            kind: LineKind::RoomHeader,
            description: name.to_string(),
            detail: String::new(),
            unit_label: String::new(),
            quantity: 0.0,
            unit_price: 0,
            line_total: 0,
            weight: ROOM_HEADER_WEIGHT,
        }
    }
}

// ==========================================
// DocumentPage - 单页
// ==========================================
// 续页顶部带 "承前页" (ยอดยกมา), 非末页底部带
// "转后页" (ยอดยกไป), 金额为截至该页的累计值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    pub page_no: u32,                    // 页码 (从 1 起)
    pub total_pages: u32,                // 总页数
    pub header: Option<DocumentHeader>,  // 店头+客户信息 (仅首页)
    pub lines: Vec<QuotationLine>,       // 本页内容行
    pub brought_forward: Option<i64>,    // 承前页累计 (首页无)
    pub carried_forward: Option<i64>,    // 转后页累计 (末页无)
    pub summary: Option<SummaryBlock>,   // 汇总块 (仅末页)
}

// ==========================================
// DocumentHeader - 首页抬头
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub shop: ShopProfile,          // 店铺信息
    pub quote_no: String,           // 报价单号 (无则空串)
    pub quote_date: NaiveDate,      // 开单日期
    pub customer_name: String,      // 客户姓名
    pub customer_phone: String,     // 客户电话
    pub customer_address: String,   // 客户地址
}

// ==========================================
// SummaryBlock - 末页汇总块
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryBlock {
    pub subtotal: i64,              // 小计 (铢)
    pub vat_rate: f64,              // 税率 (0 则不打印税行)
    pub vat_amount: Option<i64>,    // 税额 (仅 vat_rate > 0)
    pub grand_total: i64,           // 含税合计 (铢)
    pub grand_total_words: String,  // 大写金额 (泰文 Bahttext)
}

// ==========================================
// DocumentModel - 整份报价单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    pub pages: Vec<DocumentPage>, // 按页序排列的渲染块
}
