use nimbus_core::{
    CloudConfig, DeterministicTextMeasurer, FontScale, TextStyle, WordSizer, count_words, tokenize,
};
use nimbus_render::svg::{SvgRenderOptions, render_cloud_svg};
use nimbus_render::{layout_cloud, model::CloudLayout};

fn small_layout(text: &str) -> CloudLayout {
    let counts = count_words(tokenize(text));
    let measurer = DeterministicTextMeasurer::default();
    let sizer = WordSizer::new(
        FontScale::new(12.0, 36.0).expect("scale"),
        TextStyle::default(),
        &measurer,
    );
    let words = sizer.size_words(&counts);
    layout_cloud(&words, &CloudConfig::default()).expect("layout")
}

#[test]
fn svg_has_root_viewbox_and_one_text_per_tag() {
    let layout = small_layout("winter winter summer spring");
    let svg = render_cloud_svg(&layout, &SvgRenderOptions::default());

    assert!(svg.starts_with("<svg id=\"nimbus\""));
    assert!(svg.contains("viewBox=\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<text").count(), layout.tags.len());
    assert!(svg.contains(">winter</text>"));
}

#[test]
fn svg_escapes_markup_in_words() {
    let mut layout = small_layout("plain");
    layout.tags[0].text = "a<b&c".to_string();
    let svg = render_cloud_svg(&layout, &SvgRenderOptions::default());

    assert!(svg.contains("a&lt;b&amp;c"));
    assert!(!svg.contains("a<b&c"));
}

#[test]
fn background_and_id_options_are_honored() {
    let layout = small_layout("word");
    let svg = render_cloud_svg(
        &layout,
        &SvgRenderOptions {
            diagram_id: Some("my-cloud".to_string()),
            background: Some("white".to_string()),
            ..Default::default()
        },
    );

    assert!(svg.starts_with("<svg id=\"my-cloud\""));
    assert!(svg.contains("background-color: white;"));
    assert!(svg.contains("#my-cloud .tag"));
}

#[test]
fn show_boxes_emits_one_rect_per_tag() {
    let layout = small_layout("one two three");
    let svg = render_cloud_svg(
        &layout,
        &SvgRenderOptions {
            show_boxes: true,
            ..Default::default()
        },
    );
    assert_eq!(svg.matches("<rect class=\"tagBox\"").count(), layout.tags.len());
}

#[test]
fn empty_layout_renders_a_valid_empty_svg() {
    let layout = CloudLayout {
        tags: Vec::new(),
        bounds: None,
    };
    let svg = render_cloud_svg(&layout, &SvgRenderOptions::default());
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("<text"));
}

#[test]
fn layout_model_round_trips_through_json() {
    let layout = small_layout("alpha beta beta");
    let json = serde_json::to_string(&layout).expect("serialize");
    let back: CloudLayout = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.tags.len(), layout.tags.len());
    assert_eq!(back.tags[0].text, layout.tags[0].text);
    assert_eq!(back.bounds, layout.bounds);
}
