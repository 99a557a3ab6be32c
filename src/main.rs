// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! boxlabel - bounding box labeling for folders of images
//!
//! A desktop application for browsing a folder of images, dragging boxes
//! over regions of interest, labeling them, and exporting everything as JSON.

mod app;
mod command;
mod config;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::AnnotatorApp;
use config::Config;
use std::path::Path;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Config::load_or_default(Path::new(config::CONFIG_FILE_NAME))?;
    log::info!(
        "Starting in {}, exporting to {}",
        config.initial_dir.display(),
        config.export_path().display()
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("boxlabel - Image Box Annotation"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "boxlabel",
        options,
        Box::new(|_cc| Ok(Box::new(AnnotatorApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
