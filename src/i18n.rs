// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和德文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "de"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use eaf_slag_dst::i18n::t;
/// let msg = t("report.pros");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use eaf_slag_dst::i18n::t_with_args;
/// let msg = t_with_args("report.link_depv", &[("url", "https://example.org")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 显式设置为默认语言
        set_locale("en");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 测试切换语言
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale("de");
        assert_eq!(current_locale(), "de");

        // 恢复默认语言
        set_locale("en");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 测试英文翻译
        set_locale("en");
        let msg = t("report.pros");
        assert_eq!(msg, "Pros:");

        // 测试德文翻译
        set_locale("de");
        let msg = t("report.pros");
        assert_eq!(msg, "Vorteile:");

        // 恢复默认语言
        set_locale("en");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 测试英文翻译（带参数）
        set_locale("en");
        let msg = t_with_args(
            "report.link_depv",
            &[("url", "https://www.gesetze-im-internet.de/depv_2009/")],
        );
        assert!(msg.contains("https://www.gesetze-im-internet.de/depv_2009/"));
        assert!(msg.contains("DepV"));

        // 测试德文翻译（带参数）
        set_locale("de");
        let msg = t_with_args(
            "report.link_depv",
            &[("url", "https://www.gesetze-im-internet.de/depv_2009/")],
        );
        assert!(msg.contains("https://www.gesetze-im-internet.de/depv_2009/"));

        // 恢复默认语言
        set_locale("en");
    }
}
