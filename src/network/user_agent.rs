//! User agent generation

use rand::seq::SliceRandom;
use rand::Rng;

const CHROME_VERSIONS: &[&str] = &["122.0.0.0", "123.0.0.0", "124.0.0.0", "125.0.0.0"];

const FIREFOX_VERSIONS: &[&str] = &["123.0", "124.0", "125.0"];

// Baidu serves a reduced mobile layout to mobile agents, so desktop only
const OS_STRINGS: &[&str] = &[
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

/// Generate a random but realistic desktop user agent string
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();

    let os = OS_STRINGS.choose(&mut rng).copied().unwrap_or(OS_STRINGS[0]);

    // Chrome 70%, Firefox 30%
    if rng.gen_range(0..10) < 7 {
        let chrome = CHROME_VERSIONS
            .choose(&mut rng)
            .copied()
            .unwrap_or(CHROME_VERSIONS[0]);
        format!(
            "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            os, chrome
        )
    } else {
        let firefox = FIREFOX_VERSIONS
            .choose(&mut rng)
            .copied()
            .unwrap_or(FIREFOX_VERSIONS[0]);
        format!(
            "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
            os, firefox, firefox
        )
    }
}

/// Standard accept headers for HTML requests
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
}

/// Accept-Language favouring simplified Chinese, which Baidu expects
pub fn accept_language() -> &'static str {
    "zh-CN,zh;q=0.9,en;q=0.8"
}
