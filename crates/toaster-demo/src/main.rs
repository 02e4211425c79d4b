//! Toaster demo - main entry point.
//!
//! Loads settings, starts a toast context and walks the presentation
//! manager through the common show/replace/dismiss flows while a logging
//! overlay surface reports what would be drawn.

use std::time::Duration;

use toaster_core::{Leading, Renderable, ToastConfig, ToastImageKind, ToastLayout, ToastSettings};
use toaster_runtime::{
    pump_overlay, toast, OverlayBinding, OverlayFrame, OverlaySurface, TapTarget, ToastContext,
};

// =============================================================================
// Logging Surface
// =============================================================================

/// Overlay surface that describes each frame in the log.
struct LogSurface;

impl OverlaySurface for LogSurface {
    fn present(&mut self, frame: &OverlayFrame) {
        let body = describe(&frame.layout());
        if frame.exiting {
            tracing::info!("overlay: exiting [{}]", body);
        } else if frame.intercept_layer {
            tracing::info!("overlay: [{}] over full-screen layer", body);
        } else {
            tracing::info!("overlay: [{}]", body);
        }
    }

    fn clear(&mut self) {
        tracing::info!("overlay: empty");
    }
}

fn describe(layout: &ToastLayout<'_>) -> String {
    match layout {
        ToastLayout::Custom(content) => format!("custom {:?}", content),
        ToastLayout::Standard { leading, text } => {
            let leading = match leading {
                Some(Leading::Image(ToastImageKind::Spinner)) => "(spinner) ".to_string(),
                Some(Leading::Image(kind)) => format!("({}) ", kind.name().unwrap_or_default()),
                Some(Leading::Custom(content)) => format!("({:?}) ", content),
                None => String::new(),
            };
            format!("{}{}", leading, text.unwrap_or_default())
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Load settings from the config directory, falling back to defaults.
fn load_settings() -> ToastSettings {
    match ToastSettings::load_default() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Using default settings: {}", e);
            ToastSettings::default()
        }
    }
}

// =============================================================================
// Walkthrough
// =============================================================================

async fn pause(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

async fn run_walkthrough(binding: &OverlayBinding) {
    tracing::info!("-- text, auto-dismiss after 1s");
    toast::show(ToastConfig::text("Hello", None).duration_secs(1.0));
    pause(1500).await;

    tracing::info!("-- replace mid-countdown");
    toast::show(ToastConfig::text("First", None).duration_secs(2.0));
    pause(500).await;
    toast::show(ToastConfig::text("Second", None).duration_secs(1.0));
    pause(1500).await;

    tracing::info!("-- tap handling");
    toast::show(ToastConfig::text("Not removable", None).full_screen(true));
    binding.tap(TapTarget::InterceptLayer);
    pause(100).await;
    toast::show_auto_dismiss("Tap anywhere", None);
    binding.tap(TapTarget::InterceptLayer);
    pause(500).await;

    tracing::info!("-- presets");
    toast::show_success("Saved");
    pause(500).await;
    toast::show_error("Upload failed");
    pause(500).await;
    toast::show_warning("Low battery");
    pause(500).await;
    toast::show_loading(None);
    pause(500).await;
    toast::dismiss();
    pause(500).await;

    tracing::info!("-- custom content");
    toast::show_with_leading(
        "Working",
        Renderable::Image(ToastImageKind::system_icon("hourglass")),
    );
    pause(300).await;
    toast::show_custom(Renderable::Stack(vec![
        Renderable::label("Custom toast"),
        Renderable::Image(ToastImageKind::system_icon("star.fill")),
    ]));
    pause(300).await;
    toast::dismiss();
    pause(500).await;
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Toaster demo starting...");

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let context = match ToastContext::start(load_settings()) {
            Ok(context) => context,
            Err(e) => {
                tracing::error!("Failed to start toast context: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        toaster_runtime::enable_debug_log();
        context.install_global();

        let binding = OverlayBinding::new(context.manager().clone());
        let pump = tokio::spawn(pump_overlay(context.manager().subscribe(), LogSurface));

        run_walkthrough(&binding).await;

        drop(binding);
        context.shutdown();
        pump.abort();
    });

    tracing::info!("Toaster demo finished");
}
