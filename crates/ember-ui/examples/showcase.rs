//! Drives the widget core without a window: builds a value-backed list UI,
//! feeds it synthetic input, and prints what the render layer would see.
//!
//! Run with logging to watch resolution and value traffic:
//!
//! ```sh
//! RUST_LOG=ember_ui=trace,ember_ui_core=trace cargo run --example showcase
//! ```

use std::sync::Arc;

use ember_ui::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A clamped scroll position driven by a repeat button.
    let scroll = Arc::new(
        BoundedValue::new()
            .with_range(Some(0.0), Some(30.0))
            .with_steps(5.0, 15.0)
            .with_enforcement(RangeEnforcement::Clamp),
    );
    scroll.value_changed.connect(|&v| println!("scroll -> {v}"));

    let mut down_arrow = RepeatButton::new();
    down_arrow
        .widget_base_mut()
        .set_geometry(Rect::new(0.0, 0.0, 16.0, 16.0));
    let scroll_clone = scroll.clone();
    down_arrow.clicked.connect(move |_| {
        scroll_clone.step_up().unwrap();
    });

    // Hold the button for eight frames; the value saturates at 30.
    let cursor = Point::new(8.0, 8.0);
    down_arrow.handle_pointer_press(&PointerPressEvent::primary(cursor));
    for _ in 0..8 {
        down_arrow.handle_pointer_move(&PointerMoveEvent::at(cursor));
    }
    down_arrow.handle_pointer_release(&PointerReleaseEvent::primary(cursor));
    println!("final scroll position: {}", scroll.value());

    // Content hosting: the same host presents text, an image, and a
    // ready-made widget.
    let host = ContentHost::new();
    host.content_changed.connect(|_| println!("content replaced"));

    host.set_content("loading…");
    describe_child(&host);

    host.set_content(ImageResource::solid(64, 64, [200, 60, 20, 255]));
    describe_child(&host);

    host.set_content(WidgetRef::new(Label::new("I am already a widget")));
    describe_child(&host);

    // A template takes over non-widget content.
    host.set_template(Some(Arc::new(|content: &Content| {
        WidgetRef::new(Label::new(format!("templated {content:?}")))
    }) as ContentTemplateRef));
    host.set_content(ImageResource::solid(8, 8, [0, 0, 0, 255]));
    describe_child(&host);

    // A row with state-dependent backgrounds.
    let mut row = ListItem::new().with_content("inbox (3)");
    row.set_background(Some(Brush::solid(Color::WHITE)));
    row.set_selected_background(Some(Brush::solid(Color::from_rgb8(30, 90, 210))));
    row.set_selected(true);
    println!("selected row background: {:?}", row.background());

    // Legacy-layout text correction.
    let mut input = TextInput::new().with_keyboard_layout(
        KeyboardLayout::new("Russian").with_legacy_code_page(CodePage::Windows1251),
    );
    for mangled in ["\u{CF}", "\u{F0}", "\u{E8}"] {
        input.handle_text_input(&TextInputEvent::direct(mangled));
    }
    println!("recovered text: {}", input.text());
}

fn describe_child(host: &ContentHost) {
    match host.child() {
        Some(child) => {
            let described = child
                .downcast(|l: &Label| format!("label {:?}", l.text()))
                .or_else(|| child.downcast(|v: &ImageView| format!("image {:?}", v.intrinsic_size())))
                .unwrap_or_else(|| format!("widget {:?}", child.id()));
            println!("child: {described}");
        }
        None => println!("child: none"),
    }
}
