// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use curtain_quote::domain::quote::{CurtainSet, Decoration, Quote, Room, Wallpaper};
use curtain_quote::domain::types::{CurtainStyle, FabricVariant};

// ==========================================
// Quote 构建器
// ==========================================

pub struct QuoteBuilder {
    quote: Quote,
}

impl QuoteBuilder {
    pub fn new(customer_name: &str) -> Self {
        let mut quote = Quote::new(customer_name);
        quote.customer_phone = "081-234-5678".to_string();
        quote.customer_address = "ชลบุรี".to_string();
        Self { quote }
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.quote.rooms.push(room);
        self
    }

    pub fn build(self) -> Quote {
        self.quote
    }
}

// ==========================================
// Room 构建器
// ==========================================

pub struct RoomBuilder {
    room: Room,
}

impl RoomBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        let mut room = Room::new(name);
        room.id = id.to_string();
        Self { room }
    }

    pub fn suspended(mut self) -> Self {
        self.room.is_suspended = true;
        self
    }

    pub fn with_set(mut self, set: CurtainSet) -> Self {
        self.room.sets.push(set);
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.room.decorations.push(decoration);
        self
    }

    pub fn with_wallpaper(mut self, wallpaper: Wallpaper) -> Self {
        self.room.wallpapers.push(wallpaper);
        self
    }

    pub fn build(self) -> Room {
        self.room
    }
}

// ==========================================
// 条目工厂
// ==========================================

/// 标准双层套装 (每侧 2600, 合计 5200)
pub fn double_fabric_set(id: &str) -> CurtainSet {
    CurtainSet {
        id: id.to_string(),
        width_m: 2.0,
        height_m: 2.6,
        style: CurtainStyle::Wave,
        fabric_variant: FabricVariant::Both,
        opaque_price_per_m: 1000.0,
        sheer_price_per_m: 1000.0,
        fabric_code: "VD-201".to_string(),
        sheer_fabric_code: "SR-105".to_string(),
        ..CurtainSet::new()
    }
}

/// 单层遮光套装
pub fn opaque_set(id: &str, width_m: f64, price_per_m: f64) -> CurtainSet {
    CurtainSet {
        id: id.to_string(),
        width_m,
        height_m: 2.4,
        style: CurtainStyle::Pleat,
        fabric_variant: FabricVariant::Opaque,
        opaque_price_per_m: price_per_m,
        ..CurtainSet::new()
    }
}

/// 罗马帘装饰件
pub fn roman_blind(id: &str, width_m: f64, height_m: f64) -> Decoration {
    Decoration {
        id: id.to_string(),
        width_m,
        height_m,
        price_per_sq_yd: 450.0,
        ..Decoration::new("ม่านพับ")
    }
}

/// 标准墙纸条目 (矮墙, 需 4 卷)
pub fn standard_wallpaper(id: &str) -> Wallpaper {
    Wallpaper {
        id: id.to_string(),
        height_m: 2.4,
        widths: vec![2.0, 3.0],
        price_per_roll: 800.0,
        install_cost_per_roll: 300.0,
        code: "WP-889".to_string(),
        ..Wallpaper::new()
    }
}
