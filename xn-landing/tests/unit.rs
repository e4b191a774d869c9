#[macro_use]
extern crate matches;

use xn_landing::name::{decode_label, first_label, resolve};
use xn_landing::toc::{self, Heading};
use xn_landing::{Config, Device, Error, NameSource, Page, Profile};

#[test]
fn decoded_name_with_analytics() {
    let config = Config::default();
    let page = Page::for_url("http://xn--zhq692d06i.xn--6qq986b3xl/", None, &config);
    assert_eq!(page.name, "杨丞琳");
    assert_eq!(page.name_source, NameSource::Decoded);
    assert_eq!(page.title, "杨丞琳我爱你");
    assert_eq!(page.slug, "yangchenglin");
    assert_eq!(
        page.analytics.as_deref(),
        Some("http://hm.baidu.com/hm.js?c775ba6530ecd7e0d918fcbf2405da47")
    );
}

#[test]
fn decoded_name_without_profile() {
    let config = Config::default();
    let page = Page::for_url("xn--cpq382ajlc.xn--6qq986b3xl", None, &config);
    assert_eq!(page.name, "张小伟");
    assert_eq!(page.name_source, NameSource::Decoded);
    assert_eq!(page.slug, "huangtingting");
    assert_eq!(page.analytics, None);
    assert_eq!(page.link, "http://张小伟.我爱你");
}

#[test]
fn undecodable_label_falls_back() {
    let config = Config::default();
    let page = Page::for_url("http://xn--99.xn--6qq986b3xl/", None, &config);
    assert_eq!(page.name, "黄婷婷");
    assert_eq!(page.name_source, NameSource::Fallback);
}

#[test]
fn configured_default_name() {
    let config = Config::default()
        .default_name("小明")
        .sample_name("小红")
        .domain_suffix("com")
        .profile("小明", Profile::new("xiaoming", ""));
    let name = resolve("http://localhost:8080/", &config);
    assert_eq!(name.name, "小明");
    let page = Page::build(&name, Device::Desktop, &config);
    assert_eq!(page.domain, "小明.com");
    assert_eq!(page.sample_signature, "--小红宣");
    assert_eq!(page.slug, "xiaoming");
    assert_eq!(page.analytics, None);
}

#[test]
fn config_file() {
    let path = std::env::temp_dir().join(format!("xn-landing-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"music": "song.ogg", "slideshow": {"slide_time_ms": 500}}"#)
        .unwrap();
    let config = Config::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let page = Page::for_url("http://example.com/", Some("iPhone"), &config);
    assert_eq!(page.music.url, "http://bucuo.site/domain/song.ogg");
    assert_eq!(page.slideshow.slide_time_ms, 500);
    assert_eq!(page.slideshow.mode, "wheel,touch,nav:navBar");
    assert_eq!(page.slideshow.rotate, [0, 0]);
}

#[test]
fn config_errors() {
    assert_matches!(Config::from_json("{"), Err(Error::Json(_)));
    assert_matches!(
        Config::from_path("/nonexistent/xn-landing.json"),
        Err(Error::Io(_))
    );
}

#[test]
fn page_serializes_to_json() {
    let config = Config::default();
    let page = Page::for_url("http://xn--r8s482g.xn--6qq986b3xl/", Some("Android"), &config);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["name"], "孙芮");
    assert_eq!(json["name_source"], "decoded");
    assert_eq!(json["device"], "mobile");
    assert_eq!(json["music"]["looped"], true);
    assert_eq!(json["slideshow"]["rotate"], serde_json::json!([0, 0]));
    assert_eq!(json["images"].as_array().map(Vec::len), Some(3));
}

#[test]
fn decode_errors() {
    assert_matches!(
        decode_label("xn--ü-tda"),
        Err(Error::Decode {
            source: xn_label::Error::NotBasicCodePoint,
            ..
        })
    );
    let message = decode_label("xn--9999999999").unwrap_err().to_string();
    assert_eq!(
        message,
        "cannot decode label \"xn--9999999999\": overflow: input needs wider integers to process"
    );
}

#[test]
fn markdown_toc() {
    let headings = Heading::parse_markdown("# 简介\n### 安装\n## 使用\n");
    assert_eq!(headings.len(), 3);
    let html = toc::render(&headings);
    assert!(html.starts_with(r#"<div class="markdown-toc"><ol data-level="1">"#));
    assert!(html.contains(r##"<li><a href="#"></a><ol data-level="3"><li><a href="#安装">安装</a>"##));
    assert!(html.ends_with("</div>"));
    assert_eq!(html.matches("<ol").count(), html.matches("</ol>").count());
    assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
}

#[test]
fn any_url_builds_a_page() {
    let config = Config::default();
    bolero::check!()
        .with_type::<(String, Option<String>)>()
        .for_each(|(href, user_agent)| {
            let page = Page::for_url(href, user_agent.as_deref(), &config);
            assert!(!page.name.is_empty());
            assert_eq!(page.images.len(), 3);
            if page.name_source != NameSource::Decoded {
                assert_eq!(page.name, "黄婷婷");
            }
            let _ = first_label(href);
        });
}

#[test]
fn any_headings_render_balanced_lists() {
    bolero::check!()
        .with_type::<Vec<(u8, String)>>()
        .for_each(|headings| {
            let headings: Vec<Heading> = headings
                .iter()
                .map(|(level, text)| Heading::new(level % 6 + 1, text, text))
                .collect();
            let html = toc::render(&headings);
            assert_eq!(html.matches("<ol").count(), html.matches("</ol>").count());
        });
}
