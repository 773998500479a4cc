// ==========================================
// 窗帘墙纸报价系统 - 领域类型定义
// ==========================================
// 职责: 窗帘款式/布料组合等类型安全枚举
// 序列化格式: 泰文门店用语 (与存量 JSON 快照一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 窗帘款式 (Curtain Style)
// ==========================================
// 款式决定布料用量系数与款式加价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurtainStyle {
    #[serde(rename = "ลอน")]
    Wave, // 波浪帘 (ลอน)
    #[serde(rename = "ตาไก่")]
    Eyelet, // 孔眼帘 (ตาไก่)
    #[serde(rename = "จีบ")]
    Pleat, // 打褶帘 (จีบ)
    #[serde(other)]
    Unknown, // 未知款式: 不加价, 不计布料
}

impl CurtainStyle {
    /// 门店用语 (打印到报价单上的泰文)
    pub fn as_str(&self) -> &str {
        match self {
            CurtainStyle::Wave => "ลอน",
            CurtainStyle::Eyelet => "ตาไก่",
            CurtainStyle::Pleat => "จีบ",
            CurtainStyle::Unknown => "",
        }
    }
}

impl Default for CurtainStyle {
    fn default() -> Self {
        CurtainStyle::Unknown
    }
}

impl fmt::Display for CurtainStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 布料组合 (Fabric Variant)
// ==========================================
// 遮光布/纱帘可单独计价, 也可组合 (ทึบ&โปร่ง)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FabricVariant {
    #[serde(rename = "ทึบ")]
    Opaque, // 仅遮光布 (ทึบ)
    #[serde(rename = "โปร่ง")]
    Sheer, // 仅纱帘 (โปร่ง)
    #[serde(rename = "ทึบ&โปร่ง")]
    Both, // 遮光布+纱帘双层 (需双层支架)
    #[serde(other)]
    Unknown, // 未知组合: 两侧均不计价
}

impl FabricVariant {
    /// 是否包含遮光布侧
    pub fn has_opaque(&self) -> bool {
        matches!(self, FabricVariant::Opaque | FabricVariant::Both)
    }

    /// 是否包含纱帘侧
    pub fn has_sheer(&self) -> bool {
        matches!(self, FabricVariant::Sheer | FabricVariant::Both)
    }

    /// 门店用语
    pub fn as_str(&self) -> &str {
        match self {
            FabricVariant::Opaque => "ทึบ",
            FabricVariant::Sheer => "โปร่ง",
            FabricVariant::Both => "ทึบ&โปร่ง",
            FabricVariant::Unknown => "",
        }
    }
}

impl Default for FabricVariant {
    fn default() -> Self {
        FabricVariant::Unknown
    }
}

impl fmt::Display for FabricVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_sides() {
        assert!(FabricVariant::Opaque.has_opaque());
        assert!(!FabricVariant::Opaque.has_sheer());
        assert!(FabricVariant::Sheer.has_sheer());
        assert!(FabricVariant::Both.has_opaque());
        assert!(FabricVariant::Both.has_sheer());
        assert!(!FabricVariant::Unknown.has_opaque());
        assert!(!FabricVariant::Unknown.has_sheer());
    }

    #[test]
    fn test_style_serde_thai() {
        let style: CurtainStyle = serde_json::from_str("\"ลอน\"").unwrap();
        assert_eq!(style, CurtainStyle::Wave);
        assert_eq!(serde_json::to_string(&style).unwrap(), "\"ลอน\"");

        // 未知款式不报错, 落到 Unknown
        let style: CurtainStyle = serde_json::from_str("\"ม่านพับ\"").unwrap();
        assert_eq!(style, CurtainStyle::Unknown);
    }

    #[test]
    fn test_variant_serde_thai() {
        let v: FabricVariant = serde_json::from_str("\"ทึบ&โปร่ง\"").unwrap();
        assert_eq!(v, FabricVariant::Both);
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"ทึบ&โปร่ง\"");
    }
}
