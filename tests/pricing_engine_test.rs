// ==========================================
// AggregationEngine 集成测试
// ==========================================
// 职责: 验证快照计价的三级汇总与用料统计
// ==========================================

use curtain_quote::domain::calculation::{ItemCalculation, RollRequirement};
use curtain_quote::domain::types::FabricVariant;
use curtain_quote::{PricingProfile, QuotationApi};

mod helpers;
use helpers::test_data_builder::{
    double_fabric_set, opaque_set, roman_blind, standard_wallpaper, QuoteBuilder, RoomBuilder,
};

// ==========================================
// 基本计价与汇总
// ==========================================

#[test]
fn test_full_quote_aggregation() {
    let quote = QuoteBuilder::new("คุณสมชาย")
        .with_room(
            RoomBuilder::new("r1", "ห้องนอนใหญ่")
                .with_set(double_fabric_set("s1"))
                .with_decoration(roman_blind("d1", 2.0, 1.5))
                .build(),
        )
        .with_room(
            RoomBuilder::new("r2", "ห้องรับแขก")
                .with_wallpaper(standard_wallpaper("w1"))
                .build(),
        )
        .build();

    let api = QuotationApi::with_defaults();
    let result = api.price(&quote);

    // 套装: 每侧 round((1000+200+100)*2) = 2600, 合计 5200
    let ItemCalculation::CurtainSet(set_calc) = &result.items["s1"] else {
        panic!("s1 应为套装结果");
    };
    assert_eq!(set_calc.total, 5200);

    // 装饰件: 2*1.5*1.19599 平方码 * 450 铢
    let ItemCalculation::Decoration(deco_calc) = &result.items["d1"] else {
        panic!("d1 应为装饰件结果");
    };
    let expected_deco = (2.0 * 1.5 * 1.19599 * 450.0_f64).round() as i64;
    assert_eq!(deco_calc.total, expected_deco);

    // 墙纸: 4 卷 * (800 + 300)
    let ItemCalculation::Wallpaper(wp_calc) = &result.items["w1"] else {
        panic!("w1 应为墙纸结果");
    };
    assert_eq!(wp_calc.rolls, RollRequirement::Rolls(4));
    assert_eq!(wp_calc.total, 4400);

    // 房间小计与全单合计
    assert_eq!(result.rooms["r1"].subtotal, 5200 + expected_deco);
    assert_eq!(result.rooms["r2"].subtotal, 4400);
    assert_eq!(
        result.summary.grand_total,
        5200 + expected_deco + 4400
    );
    assert_eq!(result.summary.priced_item_count, 3);

    // 用料汇总
    assert_eq!(result.summary.wallpaper_rolls, 4);
    assert_eq!(result.summary.decoration_counts["ม่านพับ"], 1);
    assert!(result.summary.needs_double_bracket);
    let expected_yards = (2.0 * 2.6 + 0.6) / 0.9;
    assert!((result.summary.opaque_fabric_yards - expected_yards).abs() < 1e-9);
    assert!((result.summary.sheer_fabric_yards - expected_yards).abs() < 1e-9);
    assert_eq!(result.summary.opaque_track_m, 2.0);
    assert_eq!(result.summary.sheer_track_m, 2.0);
}

#[test]
fn test_determinism_byte_identical() {
    let quote = QuoteBuilder::new("คุณสมหญิง")
        .with_room(
            RoomBuilder::new("r1", "ห้องนอน")
                .with_set(double_fabric_set("s1"))
                .with_set(opaque_set("s2", 3.0, 850.0))
                .with_wallpaper(standard_wallpaper("w1"))
                .build(),
        )
        .build();

    let api = QuotationApi::with_defaults();
    let first = serde_json::to_string(&api.price(&quote)).unwrap();
    let second = serde_json::to_string(&api.price(&quote)).unwrap();
    assert_eq!(first, second);
}

// ==========================================
// 挂起规则
// ==========================================

#[test]
fn test_item_suspension_zeroes_calculation() {
    let mut set = double_fabric_set("s1");
    set.is_suspended = true;
    let quote = QuoteBuilder::new("ก")
        .with_room(RoomBuilder::new("r1", "ห้องนอน").with_set(set).build())
        .build();

    let result = QuotationApi::with_defaults().price(&quote);
    assert_eq!(result.items["s1"].total(), 0);
    assert_eq!(result.summary.grand_total, 0);
    assert_eq!(result.summary.priced_item_count, 0);
    // 挂起套装不参与双层支架判定
    assert!(!result.summary.needs_double_bracket);
}

#[test]
fn test_room_suspension_cascades_without_rewriting_items() {
    let quote = QuoteBuilder::new("ก")
        .with_room(
            RoomBuilder::new("r1", "ห้องนอน")
                .suspended()
                .with_set(double_fabric_set("s1"))
                .with_wallpaper(standard_wallpaper("w1"))
                .build(),
        )
        .build();

    let result = QuotationApi::with_defaults().price(&quote);
    assert_eq!(result.summary.grand_total, 0);
    assert_eq!(result.summary.wallpaper_rolls, 0);

    // 级联只发生在计算期: 条目自身标志不被改写
    assert!(!quote.rooms[0].sets[0].is_suspended);
}

#[test]
fn test_suspension_shape_matches_zero_geometry() {
    // 挂起结果与缺几何的零值结果同形
    let mut suspended = double_fabric_set("s1");
    suspended.is_suspended = true;
    let mut no_geometry = double_fabric_set("s2");
    no_geometry.width_m = 0.0;

    let quote = QuoteBuilder::new("ก")
        .with_room(
            RoomBuilder::new("r1", "ห้องนอน")
                .with_set(suspended)
                .with_set(no_geometry)
                .build(),
        )
        .build();

    let result = QuotationApi::with_defaults().price(&quote);
    assert_eq!(result.items["s1"], result.items["s2"]);
}

// ==========================================
// 双层支架判定
// ==========================================

#[test]
fn test_double_bracket_independent_of_price() {
    // 双层组合但两侧单价都是 0: 价格为 0, 仍需双层支架
    let mut set = double_fabric_set("s1");
    set.opaque_price_per_m = 0.0;
    set.sheer_price_per_m = 0.0;
    assert_eq!(set.fabric_variant, FabricVariant::Both);

    let quote = QuoteBuilder::new("ก")
        .with_room(RoomBuilder::new("r1", "ห้องนอน").with_set(set).build())
        .build();

    let result = QuotationApi::with_defaults().price(&quote);
    assert_eq!(result.summary.grand_total, 0);
    assert!(result.summary.needs_double_bracket);
}

// ==========================================
// 负数录入防护
// ==========================================

#[test]
fn test_negative_prices_never_reach_totals() {
    // 装饰件/墙纸负单价属录入错误: 条目按未计价处理,
    // 房间小计与全单合计不得出现负数
    let mut deco = roman_blind("d1", 2.0, 1.5);
    deco.price_per_sq_yd = -450.0;
    let mut wp = standard_wallpaper("w1");
    wp.price_per_roll = -800.0;
    wp.install_cost_per_roll = -300.0;

    let quote = QuoteBuilder::new("ก")
        .with_room(
            RoomBuilder::new("r1", "ห้องนอน")
                .with_decoration(deco)
                .with_wallpaper(wp)
                .build(),
        )
        .build();

    let result = QuotationApi::with_defaults().price(&quote);
    assert_eq!(result.items["d1"].total(), 0);
    assert_eq!(result.items["w1"].total(), 0);
    assert_eq!(result.rooms["r1"].subtotal, 0);
    assert_eq!(result.summary.grand_total, 0);
    assert_eq!(result.summary.priced_item_count, 0);
}

// ==========================================
// 墙纸不可施工传播
// ==========================================

#[test]
fn test_infeasible_wallpaper_is_flagged_not_zeroed() {
    let mut wp = standard_wallpaper("w1");
    wp.height_m = 11.0; // 超过整卷 10 米

    let quote = QuoteBuilder::new("ก")
        .with_room(RoomBuilder::new("r1", "ห้องรับแขก").with_wallpaper(wp).build())
        .build();

    let result = QuotationApi::with_defaults().price(&quote);
    let ItemCalculation::Wallpaper(calc) = &result.items["w1"] else {
        panic!("w1 应为墙纸结果");
    };
    assert!(calc.rolls.is_infeasible());
    assert_eq!(result.summary.infeasible_wallpaper_count, 1);
}

// ==========================================
// 自定义配置注入
// ==========================================

#[test]
fn test_custom_profile_changes_pricing() {
    let mut profile = PricingProfile::default();
    for surcharge in &mut profile.style_surcharges {
        surcharge.add_per_m = 0;
    }
    profile.height_tiers.clear();

    let quote = QuoteBuilder::new("ก")
        .with_room(
            RoomBuilder::new("r1", "ห้องนอน")
                .with_set(double_fabric_set("s1"))
                .build(),
        )
        .build();

    let api = QuotationApi::new(profile, Default::default());
    let result = api.price(&quote);
    // 无任何加价: 每侧 1000 * 2 = 2000
    assert_eq!(result.items["s1"].total(), 4000);
}
