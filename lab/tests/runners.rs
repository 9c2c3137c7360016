use std::{fs, path::Path};

use indoc::indoc;

use rwai_lab::{
    ProcessingError, RenderConfig, RenderRunner, SectionConfig, SectionRunner, SyncConfig,
    SyncRunner,
};
use rwai_models::Locale;

const HOMEPAGE_RAW: &str = indoc! {"
    # Homepage

    ## Hero Section

    ### Main Content
    - **Title (EN)**: Which AI Actually Works?
    - **Title (ZH)**: 哪个 AI 真的有效？

    ## Final CTA Section

    ### Content
    - **Button Link**: /arena
"};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn sync_then_render() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("Content");
    let output = dir.path().join("site");
    write(&content.join("Homepage/homepage.raw.md"), HOMEPAGE_RAW);

    let config = SyncConfig { content_path: content.clone() };
    config.check().unwrap();
    SyncRunner::run(&config).unwrap();
    assert!(content.join("Homepage/homepage.en.md").is_file());
    assert!(content.join("Homepage/homepage.zh.md").is_file());

    let config = RenderConfig { content_path: content.clone(), output_path: output.clone() };
    config.check().unwrap();
    RenderRunner::run(&config).unwrap();

    let index = fs::read_to_string(output.join("index.html")).unwrap();
    assert!(index.contains("url=/en"));
    for path in [
        "en/index.html",
        "zh/index.html",
        "en/about/index.html",
        "zh/faq/index.html",
        "zh/arena/index.html",
        "en/arena/intelligent-research-system-v1/index.html",
        "404.html",
    ] {
        assert!(output.join(path).is_file(), "{path}");
    }
    let home = fs::read_to_string(output.join("zh/index.html")).unwrap();
    assert!(home.contains("<h1>哪个 AI 真的有效？</h1>"));
}

#[test]
fn section_fields() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("Homepage/homepage.raw.md"), HOMEPAGE_RAW);
    SyncRunner::run(&SyncConfig { content_path: dir.path().to_owned() }).unwrap();

    let config = SectionConfig {
        content_path: dir.path().to_owned(),
        section: "Hero Section".to_string(),
        locale: Locale::Zh,
    };
    let fields = SectionRunner::fields(&config).unwrap();
    assert_eq!(fields.get("Title").map(String::as_str), Some("哪个 AI 真的有效？"));

    let config = SectionConfig { section: "Trust Section".to_string(), ..config };
    assert!(matches!(
        SectionRunner::fields(&config),
        Err(ProcessingError::SectionNotFound { .. })
    ));
}
