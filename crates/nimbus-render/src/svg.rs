//! SVG emission for a laid-out cloud.

use crate::model::{Bounds, CloudLayout};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Root `<svg id="...">`; also prefixes the embedded CSS selectors so
    /// several clouds can live in one document.
    pub diagram_id: Option<String>,
    /// CSS background color; `None` leaves the canvas transparent.
    pub background: Option<String>,
    /// Font stack for every tag; `None` uses a sans-serif default.
    pub font_family: Option<String>,
    /// Extra space around the layout bounds in the viewBox.
    pub padding: f64,
    /// Also draw each tag's placement rectangle (debugging aid).
    pub show_boxes: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            background: None,
            font_family: None,
            padding: 10.0,
            show_boxes: false,
        }
    }
}

const DEFAULT_FONT_FAMILY: &str = "\"Helvetica Neue\", Helvetica, Arial, sans-serif";

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Compact float formatting: at most 3 decimals, no trailing zeros, no "-0".
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn cloud_css(diagram_id: &str, font_family: &str) -> String {
    format!(
        "#{id} .tag{{font-family:{font};text-anchor:middle;}}#{id} .tagBox{{fill:none;stroke:#bbb;stroke-width:0.5;}}",
        id = diagram_id,
        font = font_family,
    )
}

/// Renders a standalone `<svg>` document for the cloud.
///
/// The viewBox is the layout bounds padded by `options.padding`; tags are
/// emitted in placement order, each as one centered `<text>` element.
pub fn render_cloud_svg(layout: &CloudLayout, options: &SvgRenderOptions) -> String {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("nimbus");
    let diagram_id_esc = escape_xml(diagram_id);
    let font_family = options.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY);

    let bounds = layout.bounds.clone().unwrap_or(Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 300.0,
        max_y: 150.0,
    });
    let pad = options.padding.max(0.0);
    let vb_min_x = bounds.min_x - pad;
    let vb_min_y = bounds.min_y - pad;
    let vb_w = (bounds.width() + 2.0 * pad).max(1.0);
    let vb_h = (bounds.height() + 2.0 * pad).max(1.0);

    let background_style = match options.background.as_deref() {
        Some(bg) => format!(" background-color: {};", escape_xml(bg)),
        None => String::new(),
    };

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{diagram_id_esc}" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="{min_x} {min_y} {w} {h}" style="max-width: {max_w}px;{background_style}" role="img" aria-roledescription="tag-cloud">"#,
        min_x = fmt(vb_min_x),
        min_y = fmt(vb_min_y),
        w = fmt(vb_w),
        h = fmt(vb_h),
        max_w = fmt(vb_w),
    );

    let _ = write!(
        &mut out,
        r#"<style>{}</style>"#,
        cloud_css(&diagram_id_esc, &escape_xml(font_family))
    );

    for tag in &layout.tags {
        if tag.width <= 0.0 || tag.height <= 0.0 {
            continue;
        }
        if options.show_boxes {
            let _ = write!(
                &mut out,
                r#"<rect class="tagBox" x="{x}" y="{y}" width="{w}" height="{h}"/>"#,
                x = fmt(tag.x),
                y = fmt(tag.y),
                w = fmt(tag.width),
                h = fmt(tag.height),
            );
        }

        let cx = tag.x + tag.width / 2.0;
        // Approximate vertical centering: the baseline sits a bit above the
        // box center for typical latin glyph metrics.
        let baseline_y = tag.y + tag.height / 2.0 + tag.font_size * 0.35;
        let _ = write!(
            &mut out,
            r#"<text class="tag" x="{x}" y="{y}" font-size="{size}" fill="{fill}">{text}</text>"#,
            x = fmt(cx),
            y = fmt(baseline_y),
            size = fmt(tag.font_size),
            fill = escape_xml(&tag.fill),
            text = escape_xml(&tag.text),
        );
    }

    out.push_str("</svg>\n");
    out
}
