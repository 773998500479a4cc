// ==========================================
// 窗帘墙纸报价系统 - CLI 主入口
// ==========================================
// 用法: curtain-quote <quote.json> [vat_rate]
// 输出: 打印就绪的文档模型 (JSON), 交外部渲染服务
// ==========================================

use anyhow::Context;

use curtain_quote::engine::{NoOpRenderer, QuotationRenderer};
use curtain_quote::{DocumentOptions, QuotationApi, DEFAULT_VAT_RATE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    curtain_quote::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", curtain_quote::APP_NAME, curtain_quote::VERSION);
    tracing::info!("==================================================");

    let path = std::env::args()
        .nth(1)
        .context("用法: curtain-quote <quote.json> [vat_rate]")?;
    let vat_rate = std::env::args()
        .nth(2)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_VAT_RATE);

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("无法读取快照文件: {}", path))?;

    let api = QuotationApi::with_defaults();
    let quote = QuotationApi::parse_snapshot(&json)?;
    let result = api.price(&quote);

    tracing::info!(
        grand_total = result.summary.grand_total,
        priced_items = result.summary.priced_item_count,
        "计价结果: {}",
        QuotationApi::to_words(result.summary.grand_total as f64)
    );
    if result.summary.infeasible_wallpaper_count > 0 {
        tracing::warn!(
            count = result.summary.infeasible_wallpaper_count,
            "存在不可施工的墙纸条目, 请调整墙高或分段"
        );
    }

    match api.build_quotation_document(&quote, &DocumentOptions { vat_rate }) {
        Some(document) => {
            // 计算已完成, 渲染交接是唯一的异步边界
            NoOpRenderer.render(&document).await?;
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        None => {
            tracing::warn!("全单合计为 0, 不生成报价单");
        }
    }

    Ok(())
}
