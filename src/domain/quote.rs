// ==========================================
// 窗帘墙纸报价系统 - 报价单输入快照
// ==========================================
// 职责: 与存储层约定的 JSON 快照结构
// 红线: 引擎只读快照, 绝不回写
// 说明: 数值字段可能来自表单字符串, 解析时宽松转 0
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::types::{CurtainStyle, FabricVariant};

// ==========================================
// 宽松数值解析
// ==========================================

/// 宽松解析 f64: 接受 JSON 数字或字符串, 非法输入一律转 0
///
/// 设计意图: 表单每次按键都会触发一次计算, 解析失败
/// 必须得到 0 元而不是错误 (引擎对任意输入是全函数)
pub(crate) fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// 宽松解析 f64 数组 (墙纸的分段墙宽)
pub(crate) fn flexible_f64_vec<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items.iter().map(coerce_f64).collect()),
        _ => Ok(Vec::new()),
    }
}

fn coerce_f64(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    // 所有数值字段都是非负量, 负数视为录入错误, 与非法字符串同转 0
    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

// ==========================================
// Quote - 报价单快照
// ==========================================
// 每次计算都从头遍历整个快照, 无增量状态
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(default)]
    pub customer_name: String, // 客户姓名
    #[serde(default)]
    pub customer_phone: String, // 客户电话
    #[serde(default)]
    pub customer_address: String, // 客户地址 (安装地址)
    #[serde(default)]
    pub quote_no: Option<String>, // 报价单号
    #[serde(default)]
    pub quote_date: Option<NaiveDate>, // 开单日期 (缺省取当天)
    pub rooms: Vec<Room>, // 房间列表 (缺失视为结构错误)
}

impl Quote {
    /// 创建空报价单
    pub fn new(customer_name: &str) -> Self {
        Self {
            customer_name: customer_name.to_string(),
            customer_phone: String::new(),
            customer_address: String::new(),
            quote_no: None,
            quote_date: None,
            rooms: Vec::new(),
        }
    }
}

// ==========================================
// Room - 房间
// ==========================================
// 挂起规则: 房间挂起时, 房内所有条目按 0 元计,
// 但不回写条目自身的挂起标志 (计算期判定, 不落盘)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default)]
    pub id: String, // 房间ID
    #[serde(default)]
    pub name: String, // 房间名称 (打印为分组标题)
    #[serde(default)]
    pub is_suspended: bool, // 挂起标志 (整房暂不计价)
    #[serde(default)]
    pub sets: Vec<CurtainSet>, // 窗帘套装
    #[serde(default)]
    pub decorations: Vec<Decoration>, // 装饰件 (罗马帘等, 按平方码计价)
    #[serde(default)]
    pub wallpapers: Vec<Wallpaper>, // 墙纸
}

impl Room {
    /// 创建新房间 (生成新ID)
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            is_suspended: false,
            sets: Vec::new(),
            decorations: Vec::new(),
            wallpapers: Vec::new(),
        }
    }
}

// ==========================================
// CurtainSet - 窗帘套装
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurtainSet {
    #[serde(default)]
    pub id: String, // 条目ID
    #[serde(default, deserialize_with = "flexible_f64")]
    pub width_m: f64, // 宽度 (米)
    #[serde(default, deserialize_with = "flexible_f64")]
    pub height_m: f64, // 高度 (米)
    #[serde(default)]
    pub style: CurtainStyle, // 款式 (ลอน/ตาไก่/จีบ)
    #[serde(default)]
    pub fabric_variant: FabricVariant, // 布料组合 (ทึบ/โปร่ง/ทึบ&โปร่ง)
    #[serde(default, deserialize_with = "flexible_f64")]
    pub opaque_price_per_m: f64, // 遮光布单价 (铢/米)
    #[serde(default, deserialize_with = "flexible_f64")]
    pub sheer_price_per_m: f64, // 纱帘单价 (铢/米)
    #[serde(default)]
    pub fabric_code: String, // 遮光布料号
    #[serde(default)]
    pub sheer_fabric_code: String, // 纱帘料号
    #[serde(default)]
    pub track_color: String, // 轨道颜色
    #[serde(default)]
    pub notes: String, // 备注 (非空时打印第二行)
    #[serde(default)]
    pub is_suspended: bool, // 挂起标志
}

impl CurtainSet {
    /// 创建新套装 (生成新ID)
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            width_m: 0.0,
            height_m: 0.0,
            style: CurtainStyle::default(),
            fabric_variant: FabricVariant::default(),
            opaque_price_per_m: 0.0,
            sheer_price_per_m: 0.0,
            fabric_code: String::new(),
            sheer_fabric_code: String::new(),
            track_color: String::new(),
            notes: String::new(),
            is_suspended: false,
        }
    }
}

impl Default for CurtainSet {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Decoration - 装饰件
// ==========================================
// 按平方码 (ตารางหลา) 面积计价
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoration {
    #[serde(default)]
    pub id: String, // 条目ID
    #[serde(default, rename = "type")]
    pub decoration_type: String, // 类型 (罗马帘/百叶/卷帘...)
    #[serde(default, deserialize_with = "flexible_f64")]
    pub width_m: f64, // 宽度 (米)
    #[serde(default, deserialize_with = "flexible_f64")]
    pub height_m: f64, // 高度 (米)
    #[serde(default, deserialize_with = "flexible_f64")]
    pub price_per_sq_yd: f64, // 单价 (铢/平方码)
    #[serde(default)]
    pub code: String, // 料号
    #[serde(default)]
    pub notes: String, // 备注
    #[serde(default)]
    pub is_suspended: bool, // 挂起标志
}

impl Decoration {
    /// 创建新装饰件 (生成新ID)
    pub fn new(decoration_type: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            decoration_type: decoration_type.to_string(),
            width_m: 0.0,
            height_m: 0.0,
            price_per_sq_yd: 0.0,
            code: String::new(),
            notes: String::new(),
            is_suspended: false,
        }
    }
}

// ==========================================
// Wallpaper - 墙纸
// ==========================================
// widths: 每段墙面一个宽度, 卷数按竖条裁切计算 (非面积均摊)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    #[serde(default)]
    pub id: String, // 条目ID
    #[serde(default, deserialize_with = "flexible_f64")]
    pub height_m: f64, // 墙高 (米)
    #[serde(default)]
    pub code: String, // 花色编号
    #[serde(default, deserialize_with = "flexible_f64")]
    pub price_per_roll: f64, // 材料单价 (铢/卷)
    #[serde(default, deserialize_with = "flexible_f64")]
    pub install_cost_per_roll: f64, // 安装费 (铢/卷)
    #[serde(default)]
    pub notes: String, // 备注
    #[serde(default, deserialize_with = "flexible_f64_vec")]
    pub widths: Vec<f64>, // 各段墙宽 (米)
    #[serde(default)]
    pub is_suspended: bool, // 挂起标志
}

impl Wallpaper {
    /// 创建新墙纸条目 (生成新ID)
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            height_m: 0.0,
            code: String::new(),
            price_per_roll: 0.0,
            install_cost_per_roll: 0.0,
            notes: String::new(),
            widths: Vec::new(),
            is_suspended: false,
        }
    }

    /// 墙面总宽 (米)
    pub fn total_width_m(&self) -> f64 {
        self.widths.iter().sum()
    }
}

impl Default for Wallpaper {
    fn default() -> Self {
        Self::new()
    }
}
