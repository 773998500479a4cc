// ==========================================
// 窗帘墙纸报价系统 - 泰文大写金额
// ==========================================
// 职责: 金额 -> 泰文大写 (Bahttext), 正式报价单必备
// 算法: 从高位起按 6 位一组递归, 组间插入 "ล้าน";
//       组内逐位拼 数字词+位权词, 再做三处惯用替换
// ==========================================

/// 数字词 (0 位为空串, 0 不发音)
const DIGIT_WORDS: [&str; 10] = [
    "", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// 位权词 (个/十/百/千/万/十万)
const POSITION_WORDS: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

/// 金额转泰文大写
///
/// 输入四舍五入到 2 位小数 (铢 + 萨当);
/// 萨当为 0 时以 "ถ้วน" 收尾, 零金额固定为 "ศูนย์บาทถ้วน";
/// 负数与非有限值按 0 处理 (函数对任意输入全定义)
pub fn to_words(amount: f64) -> String {
    let amount = if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    };

    // 以萨当为最小单位取整, 0.999 这类输入进位到 1 铢
    let total_satang = (amount * 100.0).round() as u64;
    let baht = total_satang / 100;
    let satang = total_satang % 100;

    if baht == 0 && satang == 0 {
        return "ศูนย์บาทถ้วน".to_string();
    }

    let mut words = String::new();
    if baht == 0 {
        words.push_str("ศูนย์");
    } else {
        words.push_str(&read_number(baht));
    }
    words.push_str("บาท");

    if satang > 0 {
        words.push_str(&read_block(satang));
        words.push_str("สตางค์");
    } else {
        words.push_str("ถ้วน");
    }

    words
}

/// 整数读法, 每 6 位一组, 组间 "ล้าน" (百万进位)
fn read_number(n: u64) -> String {
    if n < 1_000_000 {
        return read_block(n);
    }
    let rest = n % 1_000_000;
    if rest == 0 {
        format!("{}ล้าน", read_number(n / 1_000_000))
    } else {
        format!("{}ล้าน{}", read_number(n / 1_000_000), read_block(rest))
    }
}

/// 单组 (< 1,000,000) 读法
fn read_block(n: u64) -> String {
    let mut raw = String::new();
    let mut divisor = 100_000;
    for pos in (0..6).rev() {
        let digit = (n / divisor % 10) as usize;
        if digit != 0 {
            raw.push_str(DIGIT_WORDS[digit]);
            raw.push_str(POSITION_WORDS[pos]);
        }
        divisor /= 10;
    }

    // 惯用替换: หนึ่งสิบ -> สิบ, สองสิบ -> ยี่สิบ, 结尾 สิบหนึ่ง -> สิบเอ็ด
    // (数字词总是紧跟位权词, 这三个串只会出现在十位/个位)
    let replaced = raw.replace("หนึ่งสิบ", "สิบ").replace("สองสิบ", "ยี่สิบ");
    if let Some(stripped) = replaced.strip_suffix("สิบหนึ่ง") {
        format!("{}สิบเอ็ด", stripped)
    } else {
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_words(0.0), "ศูนย์บาทถ้วน");
    }

    #[test]
    fn test_basic_integers() {
        assert_eq!(to_words(1.0), "หนึ่งบาทถ้วน");
        assert_eq!(to_words(5.0), "ห้าบาทถ้วน");
        assert_eq!(to_words(10.0), "สิบบาทถ้วน");
        assert_eq!(to_words(11.0), "สิบเอ็ดบาทถ้วน");
        assert_eq!(to_words(20.0), "ยี่สิบบาทถ้วน");
        assert_eq!(to_words(21.0), "ยี่สิบเอ็ดบาทถ้วน");
        assert_eq!(to_words(100.0), "หนึ่งร้อยบาทถ้วน");
    }

    #[test]
    fn test_tens_substitution_mid_number() {
        // 十位替换发生在数字中段, 不只在结尾
        assert_eq!(to_words(112.0), "หนึ่งร้อยสิบสองบาทถ้วน");
        assert_eq!(to_words(211.0), "สองร้อยสิบเอ็ดบาทถ้วน");
        assert_eq!(to_words(121.0), "หนึ่งร้อยยี่สิบเอ็ดบาทถ้วน");
    }

    #[test]
    fn test_million_rollover() {
        let one_million = to_words(1_000_000.0);
        assert_eq!(one_million, "หนึ่งล้านบาทถ้วน");
        assert_eq!(one_million.matches("ล้าน").count(), 1);

        // 千万级: 组内 "หนึ่งสิบ" 同样替换为 "สิบ"
        assert_eq!(to_words(10_000_000.0), "สิบล้านบาทถ้วน");
        assert_eq!(to_words(11_000_000.0), "สิบเอ็ดล้านบาทถ้วน");

        // 两级 ล้าน (万亿)
        assert_eq!(
            to_words(1_000_000_000_000.0),
            "หนึ่งล้านล้านบาทถ้วน"
        );
    }

    #[test]
    fn test_mixed_million() {
        assert_eq!(
            to_words(1_234_567.0),
            "หนึ่งล้านสองแสนสามหมื่นสี่พันห้าร้อยหกสิบเจ็ดบาทถ้วน"
        );
    }

    #[test]
    fn test_satang() {
        assert_eq!(to_words(100.50), "หนึ่งร้อยบาทห้าสิบสตางค์");
        assert_eq!(to_words(0.25), "ศูนย์บาทยี่สิบห้าสตางค์");
        assert_eq!(to_words(1.01), "หนึ่งบาทหนึ่งสตางค์");
        // 萨当四舍五入进位到整铢
        assert_eq!(to_words(0.999), "หนึ่งบาทถ้วน");
    }

    #[test]
    fn test_negative_clamped_to_zero() {
        assert_eq!(to_words(-15.0), "ศูนย์บาทถ้วน");
        assert_eq!(to_words(f64::NAN), "ศูนย์บาทถ้วน");
    }
}
