// ==========================================
// 窗帘墙纸报价系统 - 报价 API
// ==========================================
// 职责: 对外暴露的三个同步操作:
//       1. price          - 快照计价
//       2. build_quotation_document - 全管线出单
//       3. to_words       - 泰文大写金额 (可独立使用)
// 架构: API 层 -> 引擎层 (全部纯函数, 无 I/O)
// ==========================================

use crate::config::{PricingProfile, ShopProfile};
use crate::domain::calculation::PricingResult;
use crate::domain::document::DocumentModel;
use crate::domain::quote::Quote;
use crate::engine::{
    bahttext, AggregationEngine, DocumentOptions, EngineError, EngineResult, LineItemBuilder,
    Paginator, QuotationAssembler,
};

// ==========================================
// QuotationApi - 报价 API
// ==========================================

/// 报价 API
///
/// 持有一份计价配置与店铺信息; 配置显式注入,
/// 同一实例上的每次计算都是引用透明的
pub struct QuotationApi {
    pricing: PricingProfile,
    shop: ShopProfile,
}

impl QuotationApi {
    /// 创建新的报价 API 实例
    pub fn new(pricing: PricingProfile, shop: ShopProfile) -> Self {
        Self { pricing, shop }
    }

    /// 使用缺省配置 (门店标准价表)
    pub fn with_defaults() -> Self {
        Self::new(PricingProfile::default(), ShopProfile::default())
    }

    /// 当前计价配置
    pub fn pricing_profile(&self) -> &PricingProfile {
        &self.pricing
    }

    // ==========================================
    // 操作 1: 快照计价
    // ==========================================

    /// 对快照执行一次全量计价
    ///
    /// 纯函数: 同一快照两次调用输出逐字节一致
    pub fn price(&self, quote: &Quote) -> PricingResult {
        AggregationEngine::new().price(&self.pricing, quote)
    }

    /// 从 JSON 快照计价 (存储层契约入口)
    ///
    /// # 返回
    /// - Err(MissingRooms): 快照缺少 rooms 数组 (调用方契约违反)
    /// - Err(InvalidSnapshot): JSON 损坏或结构不符
    pub fn price_snapshot(&self, json: &str) -> EngineResult<PricingResult> {
        let quote = Self::parse_snapshot(json)?;
        Ok(self.price(&quote))
    }

    /// 解析 JSON 快照, 结构损坏立即失败 (不做部分恢复)
    pub fn parse_snapshot(json: &str) -> EngineResult<Quote> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidSnapshot(e.to_string()))?;

        // 顶层缺 rooms 数组是调用方契约违反, 单独成错误类型
        match value.get("rooms") {
            Some(rooms) if rooms.is_array() => {}
            _ => return Err(EngineError::MissingRooms),
        }

        serde_json::from_value(value).map_err(|e| EngineError::InvalidSnapshot(e.to_string()))
    }

    // ==========================================
    // 操作 2: 全管线出单
    // ==========================================

    /// 计价 -> 摊平 -> 分页 -> 装配, 产出打印就绪文档
    ///
    /// # 返回
    /// - None: 全单合计为 0 (无可开票内容, 不得渲染)
    pub fn build_quotation_document(
        &self,
        quote: &Quote,
        options: &DocumentOptions,
    ) -> Option<DocumentModel> {
        let result = self.price(quote);
        let lines = LineItemBuilder::new().build(quote, &result);
        let pages = Paginator::new().paginate(lines);
        QuotationAssembler::new().assemble(quote, &result, pages, &self.shop, options)
    }

    // ==========================================
    // 操作 3: 大写金额
    // ==========================================

    /// 泰文大写金额 (表单实时预览也用它)
    pub fn to_words(amount: f64) -> String {
        bahttext::to_words(amount)
    }
}

impl Default for QuotationApi {
    fn default() -> Self {
        Self::with_defaults()
    }
}
