// ==========================================
// 窗帘墙纸报价系统 - 店铺信息配置
// ==========================================
// 职责: 报价单首页抬头的店铺信息块
// ==========================================

use serde::{Deserialize, Serialize};

/// 店铺信息 (打印到报价单抬头)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProfile {
    #[serde(default)]
    pub name: String, // 店名 (泰文)
    #[serde(default)]
    pub address: String, // 地址
    #[serde(default)]
    pub phone: String, // 电话
    #[serde(default)]
    pub tax_id: String, // 税号
    #[serde(default)]
    pub line_id: String, // Line 联系号 (可为空)
}

impl Default for ShopProfile {
    fn default() -> Self {
        Self {
            name: "ร้านวนิดาผ้าม่าน".to_string(),
            address: "88/8 ถ.สุขุมวิท ต.บางปลาสร้อย อ.เมือง จ.ชลบุรี 20000".to_string(),
            phone: "038-123-456".to_string(),
            tax_id: "0-2055-60000-00-0".to_string(),
            line_id: "@wanidacurtain".to_string(),
        }
    }
}
