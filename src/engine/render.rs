// ==========================================
// 窗帘墙纸报价系统 - 渲染边界
// ==========================================
// 职责: 定义文档渲染 trait, 实现依赖倒置
// 说明: 引擎核心全同步; 只有渲染交接是异步的,
//       且一次计算完成后才允许发起渲染 (不重叠)
// ==========================================

use async_trait::async_trait;

use crate::domain::document::DocumentModel;

/// 报价单渲染者 Trait
///
/// 引擎层定义, 外部服务 (无头浏览器/画布栅格化) 实现;
/// 重试与取消都属于实现方, 引擎核心不做重试
#[async_trait]
pub trait QuotationRenderer: Send + Sync {
    /// 渲染整份文档 (fire-and-forget, 失败由调用方决定提示)
    async fn render(&self, document: &DocumentModel) -> anyhow::Result<()>;
}

/// 空实现: 仅记录日志, 用于测试与无打印环境
pub struct NoOpRenderer;

#[async_trait]
impl QuotationRenderer for NoOpRenderer {
    async fn render(&self, document: &DocumentModel) -> anyhow::Result<()> {
        tracing::debug!(pages = document.pages.len(), "NoOpRenderer: 跳过实际渲染");
        Ok(())
    }
}
