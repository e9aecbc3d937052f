use egui::{Color32, Context, TextStyle, Theme};
use plot_defaults::{latest_graph_path, Palette, PaletteName, PlotStyle, LATEST_GRAPH_PATH};

const MUTED_HEX: [&str; 10] = [
    "#4878d0", "#ee854a", "#6acc64", "#d65f5f", "#956cb4", "#8c613c", "#dc7ec0", "#797979",
    "#d5bb67", "#82c6e2",
];

#[test]
fn test_latest_graph_path() {
    assert_eq!(LATEST_GRAPH_PATH, "./latest_graph.pickle");
    assert_eq!(latest_graph_path().to_str(), Some("./latest_graph.pickle"));
}

#[test]
fn test_default_style() {
    let style = PlotStyle::default();

    assert_eq!(style.font_size(), 12.);
    assert_eq!(style.palette(), &Palette::from(PaletteName::Muted));
    assert_eq!(style.palette().name(), "muted");

    let expected: Vec<Color32> = MUTED_HEX
        .iter()
        .map(|h| Color32::from_hex(h).expect("valid hex"))
        .collect();
    assert_eq!(style.palette().colors(), expected.as_slice());
}

#[test]
fn test_apply_sets_context_font_size() {
    let ctx = Context::default();
    PlotStyle::default().apply(&ctx);

    let style = ctx.style();
    for text_style in [TextStyle::Body, TextStyle::Button, TextStyle::Monospace] {
        assert_eq!(style.text_styles[&text_style].size, 12.);
    }
    assert!(style.text_styles[&TextStyle::Small].size < 12.);
    assert!(style.text_styles[&TextStyle::Heading].size > 12.);
}

#[test]
fn test_apply_covers_both_themes() {
    let ctx = Context::default();
    PlotStyle::default().apply(&ctx);

    for theme in [Theme::Dark, Theme::Light] {
        let style = ctx.style_of(theme);
        assert_eq!(style.text_styles[&TextStyle::Body].size, 12.);
        assert_eq!(style.text_styles[&TextStyle::Monospace].size, 12.);
    }

    ctx.set_theme(Theme::Light);
    assert_eq!(ctx.style().text_styles[&TextStyle::Body].size, 12.);
    ctx.set_theme(Theme::Dark);
    assert_eq!(ctx.style().text_styles[&TextStyle::Body].size, 12.);
}

#[test]
fn test_apply_is_explicit_per_context() {
    let styled = Context::default();
    let untouched = Context::default();
    let before = untouched.style().text_styles[&TextStyle::Body].size;

    PlotStyle::default()
        .with_font_size(20.)
        .expect("valid size")
        .apply(&styled);

    assert_eq!(styled.style().text_styles[&TextStyle::Body].size, 20.);
    assert_eq!(untouched.style().text_styles[&TextStyle::Body].size, before);
}

#[test]
fn test_store_and_load() {
    let ctx = Context::default();
    assert_eq!(PlotStyle::load(&ctx), PlotStyle::default());

    let style = PlotStyle::default().with_palette(Palette::named("bright6").expect("known palette"));
    style.clone().store(&ctx);

    assert_eq!(PlotStyle::load(&ctx), style);
}
