use html_cleaner::snippet::ssi_conditional;
use html_cleaner::{
    AcronymTagger, AlertLevel, CleanerBuilder, CleanerError, HtmlNormalizer, Sanitizer,
    SanitizerPipeline, TypographySanitizer, auto_tag_acronyms, clean,
};
use regex::Regex;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ALLOWED_TAGS: &[&str] = &["p", "h2", "h3", "strong", "em", "a", "ul", "ol", "li", "abbr"];

fn normalize(html: &str) -> String {
    HtmlNormalizer::new().normalize(html)
}

/// Every opening or closing tag name in `html`.
fn tag_names(html: &str) -> Vec<String> {
    let re = Regex::new(r"</?([a-zA-Z]+)").unwrap();
    re.captures_iter(html)
        .map(|caps| caps[1].to_ascii_lowercase())
        .collect()
}

/// A Quill document as pasted from Word: styled spans, empty paragraphs,
/// a flat indented list and assorted hostile markup.
const PASTED_DOCUMENT: &str = concat!(
    r#"<h1 class="ql-align-center">Microsoft Outlook issues</h1>"#,
    r#"<p><span style="color: rgb(0, 0, 0);">An issue is preventing some users</span> "#,
    r#"<span style="font-family: Calibri">from accessing their email.</span></p>"#,
    "<p><br></p>",
    r#"<ol><li data-list="ordered"><span class="ql-ui" contenteditable="false"></span>Sign out and back in.</li>"#,
    r#"<li data-list="bullet" class="ql-indent-1"><span class="ql-ui" contenteditable="false"></span>Close <u>all</u> windows first.</li>"#,
    r#"<li data-list="bullet" class="ql-indent-1"><span class="ql-ui" contenteditable="false"></span>Use your <b>HRMIS</b> number.</li>"#,
    r#"<li data-list="ordered"><span class="ql-ui" contenteditable="false"></span>Access <a href="https://outlook.example/" rel="noopener noreferrer" target="_blank">Outlook Web</a>.</li></ol>"#,
    r#"<p>Refer to <a href="javascript:steal()">tips</a> on <i>Infoweb</i>.<img src=x onerror="alert(1)"></p>"#,
    r#"<script>document.cookie</script><style>p{}</style>"#,
);

// ---------------------------------------------------------------------------
// Normalizer properties
// ---------------------------------------------------------------------------

#[test]
fn bold_italic_rename() {
    assert_eq!(normalize("<b>x</b><i>y</i>"), "<strong>x</strong><em>y</em>");
}

#[test]
fn h1_demotion() {
    assert_eq!(normalize("<h1>Title</h1>"), "<h2>Title</h2>");
}

#[test]
fn empty_paragraph_elision() {
    assert_eq!(normalize("<p><br></p>"), "");
    assert_eq!(normalize("<p></p>"), "");
    assert_eq!(normalize("<p>a</p><p></p><p><br></p>"), "<p>a</p>");
}

#[test]
fn link_scheme_rejection() {
    assert_eq!(normalize(r#"<a href="javascript:alert(1)">click</a>"#), "click");
    assert_eq!(normalize(r#"<a href=" JAVASCRIPT:alert(1)">click</a>"#), "click");
    assert_eq!(normalize(r#"<a href="data:text/html,x">click</a>"#), "click");
}

#[test]
fn flat_indent_list_reconstruction() {
    let html = concat!(
        r#"<ol><li data-list="bullet">Top</li>"#,
        r#"<li data-list="ordered" class="ql-indent-1">Sub1</li>"#,
        r#"<li data-list="ordered" class="ql-indent-1">Sub2</li></ol>"#,
    );
    assert_eq!(
        normalize(html),
        "<ul><li>Top<ol><li>Sub1</li><li>Sub2</li></ol></li></ul>"
    );
}

#[test]
fn whitespace_collapse_never_expands() {
    let html = "<p>a  \n\n  b</p>\n   \n<h2>\n c \n</h2>";
    let out = normalize(html);
    assert_eq!(out, "<p>a b</p><h2>c</h2>");
    assert!(out.len() <= html.len());
    assert!(!out.contains("  "));
    assert!(!out.contains('\n'));
}

#[test]
fn allow_list_closure_on_hostile_input() {
    let inputs = [
        PASTED_DOCUMENT,
        r#"<table><tr><td><form><input value="x"><button>go</button></form></td></tr></table>"#,
        r#"<svg><script>alert(1)</script></svg><math><mi>x</mi></math>"#,
        r#"<iframe srcdoc="<script>x</script>"></iframe><object data="x"></object>"#,
        r#"<p onclick="x()" style="x"><font color="red">red</font><blink>b</blink></p>"#,
        "<<p>>unbalanced<b><i>tags</b></i>",
        r#"<p><a href="&#1;javascript:alert(1)">x</a> <a href="&#x1f;data:text/html,y">y</a></p>"#,
    ];
    for input in inputs {
        let cleaner = CleanerBuilder::new().typography(true).link_emails(true).build().unwrap();
        for output in [normalize(input), cleaner.clean(input)] {
            for name in tag_names(&output) {
                assert!(
                    ALLOWED_TAGS.contains(&name.as_str()),
                    "tag <{name}> leaked from {input:?} into {output:?}"
                );
            }
            assert!(!output.contains("onclick"));
            assert!(!output.contains("style="));
            let lower = output.to_ascii_lowercase();
            assert!(!lower.contains("javascript:"), "script link leaked into {output:?}");
            assert!(!lower.contains("data:"), "data link leaked into {output:?}");
        }
    }
}

#[test]
fn idempotence() {
    let inputs = [
        PASTED_DOCUMENT,
        "<p>a&nbsp;&nbsp;b &amp; &lt;c&gt;</p>",
        r#"<ul><li>one<ul><li>two</li></ul></li><li>three</li></ul>"#,
        r#"<p><a href="/search?q=a&amp;b=&quot;c&quot;">q</a></p>"#,
        "plain text with   spaces",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input: {input:?}");

        let cleaner = CleanerBuilder::new().build().unwrap();
        let cleaned = cleaner.clean(input);
        assert_eq!(cleaner.clean(&cleaned), cleaned, "input: {input:?}");

        let full = CleanerBuilder::new().typography(true).link_emails(true).build().unwrap();
        let cleaned = full.clean(input);
        assert_eq!(full.clean(&cleaned), cleaned, "input: {input:?}");
    }
}

#[test]
fn typography_output_is_stable_under_recleaning() {
    let cleaner = CleanerBuilder::new().typography(true).build().unwrap();
    let once = cleaner.clean("<p>« oui »  l'avis</p>");
    assert_eq!(once, "<p>«&nbsp;oui&nbsp;» l\u{2019}avis</p>");
    assert_eq!(cleaner.clean(&once), once);
}

#[test]
fn pasted_document_end_to_end() {
    let cleaner = CleanerBuilder::new().build().unwrap();
    assert_eq!(
        cleaner.clean(PASTED_DOCUMENT),
        concat!(
            "<h2>Microsoft Outlook issues</h2>",
            "<p>An issue is preventing some users from accessing their email.</p>",
            "<ol><li>Sign out and back in.",
            "<ul><li>Close all windows first.</li>",
            "<li>Use your <strong><abbr>HRMIS</abbr></strong>number.</li></ul></li>",
            r#"<li>Access <a href="https://outlook.example/">Outlook Web</a>.</li></ol>"#,
            "<p>Refer to tips on <em>Infoweb</em>.</p>",
            "document.cookiep{}",
        )
    );
}

// ---------------------------------------------------------------------------
// Acronyms
// ---------------------------------------------------------------------------

#[test]
fn acronym_idempotence() {
    let once = auto_tag_acronyms("RCMP said RCMP will...", &["RCMP"]).unwrap();
    let twice = auto_tag_acronyms(&once, &["RCMP"]).unwrap();
    assert_eq!(once, "<abbr>RCMP</abbr> said <abbr>RCMP</abbr> will...");
    assert_eq!(twice, once);
    assert!(!twice.contains("<abbr><abbr>"));
}

#[test]
fn acronym_tagger_rejects_invalid_tokens() {
    let err = AcronymTagger::new(["ok", " "]).unwrap_err();
    assert!(matches!(err, CleanerError::InvalidAcronym(ref token) if token == " "));
    assert_eq!(err.to_string(), r#"Invalid acronym: " ""#);
}

#[test]
fn default_clean_function() {
    assert_eq!(
        clean("<p>MS Teams for the GRC</p>"),
        "<p>Microsoft Teams for the <abbr>GRC</abbr></p>"
    );
}

// ---------------------------------------------------------------------------
// Pipelines and records
// ---------------------------------------------------------------------------

#[test]
fn hand_built_pipeline() {
    let mut pipeline = SanitizerPipeline::new();
    pipeline.add(HtmlNormalizer::new());
    pipeline.add(TypographySanitizer::default());
    pipeline.add(AcronymTagger::new(["GRC"]).unwrap().expand_ms(false));

    assert_eq!(
        pipeline.sanitize("<div>« Avis de la GRC »</div>"),
        "«&nbsp;Avis de la <abbr>GRC</abbr>&nbsp;»"
    );
}

#[test]
fn record_cleaning() {
    let cleaner = CleanerBuilder::new().build().unwrap();
    let record: serde_json::Value = serde_json::json!({
        "messageEn": "<p><b>Outage</b></p><p><br></p>",
        "messageFr": "<p><b>Panne</b></p>",
        "order": 3
    });
    let serde_json::Value::Object(map) = record else {
        panic!("not an object");
    };
    let cleaned = cleaner.clean_record(&map);
    assert_eq!(cleaned["messageEn"], "<p><strong>Outage</strong></p>");
    assert_eq!(cleaned["messageFr"], "<p><strong>Panne</strong></p>");
    assert_eq!(cleaned["order"], 3);
}

#[test]
fn alert_snippet_is_bilingual() {
    let cleaner = CleanerBuilder::new().build().unwrap();
    let snippet = cleaner.alert_snippet(
        AlertLevel::Info,
        "<p>Maintenance tonight</p>",
        "<p>Entretien ce soir</p>",
    );
    assert_eq!(
        snippet,
        ssi_conditional(
            r#"<div class="alert alert-info" role="alert"><p>Maintenance tonight</p></div>"#,
            r#"<div class="alert alert-info" role="alert"><p>Entretien ce soir</p></div>"#,
        )
    );
}

#[test]
fn cleaner_is_a_sanitizer() {
    fn run(s: &dyn Sanitizer, html: &str) -> String {
        s.sanitize(html)
    }
    let cleaner = CleanerBuilder::new().build().unwrap();
    assert!(cleaner.is_blank("<p><br></p>"));
    assert_eq!(run(&cleaner, "<i>RCMP</i>"), "<em><abbr>RCMP</abbr></em>");
}
