// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. Panels only enqueue commands; the queue is drained
//! at the end of every frame and the outcomes applied to what is on screen.

use crate::command::{Command, CommandQueue, Dispatcher, Outcome};
use crate::config::Config;
use crate::error::SessionError;
use crate::io::media::LoadedImage;
use crate::models::session::SessionState;
use crate::ui::{canvas, properties, toolbar};

/// Line shown under the buttons after the last command.
struct Status {
    text: String,
    is_error: bool,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(err: &SessionError) -> Self {
        Self {
            text: err.to_string(),
            is_error: true,
        }
    }
}

/// Main application state.
pub struct AnnotatorApp {
    config: Config,

    /// Folder, navigation, label and annotations
    session: SessionState,

    /// Commands waiting to run
    queue: CommandQueue,

    dispatcher: Dispatcher,

    /// Mirror of the label text field
    label_input: String,

    /// Texture of the displayed image
    image_texture: Option<egui::TextureHandle>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Screen position where the current drag started
    drag_start: Option<egui::Pos2>,

    status: Option<Status>,
}

impl AnnotatorApp {
    /// Create the application, opening the initial folder if it exists.
    pub fn new(config: Config) -> Self {
        let mut queue = CommandQueue::new();
        if config.initial_dir.is_dir() {
            queue.push(Command::SelectFolder(Some(config.initial_dir.clone())));
        } else {
            log::debug!("Initial folder {} not found", config.initial_dir.display());
        }

        Self {
            dispatcher: Dispatcher::new(config.export_path()),
            config,
            session: SessionState::new(),
            queue,
            label_input: String::new(),
            image_texture: None,
            image_size: None,
            drag_start: None,
            status: None,
        }
    }

    /// Run every queued command to completion, in order.
    fn process_commands(&mut self, ctx: &egui::Context) {
        while let Some(command) = self.queue.pop() {
            log::debug!("Dispatching {:?}", command);
            match self.dispatcher.dispatch(&mut self.session, command) {
                Ok(outcome) => self.apply(outcome, ctx),
                Err(err) => {
                    match err {
                        SessionError::UnsupportedFileType(_) | SessionError::NoPendingSelection => {
                            log::warn!("{}", err)
                        }
                        _ => log::error!("{}", err),
                    }
                    self.status = Some(Status::error(&err));
                }
            }

            if self.session.displayed_image().is_none() {
                self.clear_image();
            }
        }
    }

    fn apply(&mut self, outcome: Outcome, ctx: &egui::Context) {
        match outcome {
            Outcome::Idle => {}
            Outcome::Display { path, index, image } => {
                self.show_image(&image, ctx);
                log::info!("Loaded image: {} ({}x{})", path.display(), image.width, image.height);
                self.status = Some(Status::info(format!(
                    "Image {}/{}",
                    index + 1,
                    self.session.image_files().len()
                )));
            }
            Outcome::Saved(annotation) => {
                let c = annotation.coordinates;
                self.status = Some(Status::info(format!(
                    "Saved '{}' at ({:.2}, {:.2}), {:.2} x {:.2}",
                    annotation.label, c.x, c.y, c.width, c.height
                )));
            }
            Outcome::Exported { path, images } => {
                self.status = Some(Status::info(format!(
                    "Wrote {} images to {}",
                    images,
                    path.display()
                )));
            }
        }
    }

    /// Create a texture for display from a decoded image.
    fn show_image(&mut self, image: &LoadedImage, ctx: &egui::Context) {
        let size = [image.width as usize, image.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
        let texture = ctx.load_texture("current_image", color_image, egui::TextureOptions::LINEAR);

        self.image_texture = Some(texture);
        self.image_size = Some((image.width, image.height));
        self.drag_start = None;
    }

    fn clear_image(&mut self) {
        self.image_texture = None;
        self.image_size = None;
        self.drag_start = None;
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Commands queued at startup
        if !self.queue.is_empty() {
            self.process_commands(ctx);
        }

        // Top menu bar and live label caption
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Select Folder...").clicked() {
                        self.queue.push(toolbar::pick_folder(&self.config.initial_dir));
                        ui.close_menu();
                    }
                    if ui.button("Write JSON").clicked() {
                        self.queue.push(Command::WriteJson);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::TopBottomPanel::top("caption").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(self.session.caption()).size(16.0),
                );
                ui.add_space(8.0);
            });
        });

        // Label entry, buttons and status line
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            toolbar::show(ui, &mut self.label_input, &self.config.initial_dir, &mut self.queue);
            if let Some(ref status) = self.status {
                let text = egui::RichText::new(&status.text).small();
                ui.label(if status.is_error {
                    text.color(egui::Color32::LIGHT_RED)
                } else {
                    text.weak()
                });
            }
            ui.add_space(6.0);
        });

        // Properties panel (right side)
        egui::SidePanel::right("properties")
            .default_width(250.0)
            .show(ctx, |ui| {
                properties::show(ui, &self.session);
            });

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let view = canvas::CanvasView {
                    texture: self.image_texture.as_ref(),
                    image_size: self.image_size,
                    annotations: self.session.current_annotations(),
                    pending: self.session.pending_selection(),
                    has_folder: self.session.image_folder().is_some(),
                    min_span: self.config.min_span,
                };
                canvas::show(ui, &view, &mut self.drag_start)
            })
            .inner;

        if let canvas::CanvasAction::Select(selection) = canvas_action {
            self.queue.push(Command::Select(selection));
        }

        self.process_commands(ctx);
    }
}
