//! 集成测试 - 转换结果与已有链接的兼容性
//!
//! 片段编码必须与浏览器端 `btoa(encodeURIComponent(p))` 逐字节一致。

use directlink_core::{
    AppSettings, ConversionMode, CopyOutcome, LinkConverter, MemoryClipboard, convert,
    decode_password, encode_password,
};
use std::time::{Duration, Instant};

const SHARE_URL: &str = "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing";

/// 已知的浏览器端编码结果
#[test]
fn test_fragment_matches_browser_encoding() {
    let cases = [
        // btoa(encodeURIComponent("hi"))
        ("hi", "aGk="),
        // encodeURIComponent("a b") == "a%20b"
        ("a b", "YSUyMGI="),
        // encodeURIComponent("ü") == "%C3%BC"
        ("ü", "JUMzJUJD"),
        // 保留字符不转义
        ("-_.!~*'()", "LV8uIX4qJygp"),
    ];

    for (password, expected) in cases {
        assert_eq!(
            encode_password(password).as_deref(),
            Some(expected),
            "password {password:?}"
        );
    }
}

/// 片段解码后与原密码一致
#[test]
fn test_fragment_roundtrip() {
    for password in ["hi", "p@ss w0rd/#?", "日本語パスワード", "emoji 🐱‍💻", "%41"] {
        let output = convert(ConversionMode::CustomDomain, "https://example.com/f", password);
        let (_, fragment) = output.split_once('#').expect("fragment present");
        assert_eq!(decode_password(fragment).unwrap(), password);
    }
}

#[test]
fn test_google_drive_examples() {
    assert_eq!(
        convert(ConversionMode::GoogleDrive, SHARE_URL, ""),
        "https://drive.google.com/uc?export=download&id=1A2b3C4d5E"
    );
    assert_eq!(
        convert(ConversionMode::GoogleDrive, SHARE_URL, "hi"),
        "https://drive.google.com/uc?export=download&id=1A2b3C4d5E#aGk="
    );
    // 没有 /d/ 段时不产生任何链接
    assert_eq!(
        convert(
            ConversionMode::GoogleDrive,
            "https://drive.google.com/drive/folders",
            "hi"
        ),
        ""
    );
}

#[test]
fn test_custom_domain_examples() {
    let url = "https://example.com/a/b";
    assert_eq!(convert(ConversionMode::CustomDomain, url, ""), url);
    assert_eq!(
        convert(ConversionMode::CustomDomain, url, "hi"),
        "https://example.com/a/b#aGk="
    );
}

/// 模拟一次完整的界面会话
#[test]
fn test_widget_session() {
    let settings = AppSettings::default();
    let mut converter = settings.new_converter();
    let mut clipboard = MemoryClipboard::default();
    let start = Instant::now();

    for c in SHARE_URL.chars() {
        converter.push_url_char(c);
    }
    converter.set_password("hi");
    assert_eq!(
        converter.output_url(),
        "https://drive.google.com/uc?export=download&id=1A2b3C4d5E#aGk="
    );

    assert_eq!(
        converter.copy(&mut clipboard, start).unwrap(),
        CopyOutcome::Copied
    );
    assert_eq!(
        clipboard.contents.as_deref(),
        Some("https://drive.google.com/uc?export=download&id=1A2b3C4d5E#aGk=")
    );
    assert_eq!(converter.copy_label(start), "Copied!");

    // 倒计时中切换模式
    converter.set_mode(ConversionMode::CustomDomain);
    assert_eq!(
        converter,
        LinkConverter::new(ConversionMode::CustomDomain, settings.copy_feedback())
    );
    assert_eq!(converter.copy_label(start), "Copy");

    // 原定的 2 秒到期对新状态无影响
    assert!(!converter.tick(start + Duration::from_millis(2000)));
}
