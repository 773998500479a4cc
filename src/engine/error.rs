// ==========================================
// 窗帘墙纸报价系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 数据录入类问题 (非法数值) 不是错误, 解析时转 0;
//       这里只收调用方契约违反 (快照结构损坏)
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 快照结构错误 =====
    #[error("报价快照缺少 rooms 数组")]
    MissingRooms,

    #[error("报价快照解析失败: {0}")]
    InvalidSnapshot(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
