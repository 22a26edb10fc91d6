/// Native demo: hovers a host in an in-memory document with every placement
/// and logs where the bubble lands.
///
/// An optional first argument names a JSON config file (`TooltipConfig`).
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use perch::{
        logging, Document, MemoryDocument, MemoryFactory, NodeSpec, Point, Rectangle, Tooltip, TooltipConfig,
        TriggerEvent,
    };

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| TooltipConfig::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => TooltipConfig::default(),
    };
    logging::init(config.log_level.to_level_filter().max(log::LevelFilter::Info));

    let doc = MemoryDocument::new();
    doc.set_page_scroll(Point::new(0.0, 120.0));
    let host = doc.insert(None, NodeSpec::new(Rectangle::new(200.0, 300.0, 120.0, 32.0)));
    log::info!("Host viewport rect {:?}, page scroll {:?}", doc.bounding_rect(&host), doc.page_scroll());

    for placement in [
        "top", "bottom", "left", "right", "top-left", "bottom-right", "left-top", "right-bottom",
    ] {
        let options = config.defaults.placement(placement);
        let mut tooltip = Tooltip::new(host, "Save changes", MemoryFactory::new(doc.clone())).options(options);

        tooltip.handle_event(TriggerEvent::MouseEnter);
        match tooltip.element_state() {
            Some(state) => log::info!(
                "{:>12}: left={:>7.1} top={:>7.1} visible={} faded={}",
                placement,
                state.left,
                state.top,
                state.visible,
                state.faded
            ),
            None => log::info!("{:>12}: not shown (disabled={})", placement, options.disabled),
        }
        tooltip.handle_event(TriggerEvent::MouseLeave);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
