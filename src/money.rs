//! 엔화 금액 표기.

/// 금액을 원 단위(엔)로 반올림하고 천 단위 구분 기호를 붙인다. 예: `¥112,800,000`
pub fn format_yen(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}¥{}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// 백분율을 소수 첫째 자리까지 표기한다.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// 정수 자릿수 문자열에 세 자리마다 쉼표를 넣는다.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
