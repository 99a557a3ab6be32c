// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! User commands and their dispatch.
//!
//! UI handlers never touch the session directly. They enqueue a
//! [`Command`]; after each UI pass the app drains the queue and hands every
//! command to the [`Dispatcher`], one at a time, each to completion.

use crate::error::SessionError;
use crate::io::media::{self, LoadedImage};
use crate::io::serialization;
use crate::models::{annotation::{Annotation, Selection}, session::SessionState};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Picked folder, `None` if the dialog was cancelled.
    SelectFolder(Option<PathBuf>),
    SetLabel(String),
    Select(Selection),
    Save,
    NextImage,
    WriteJson,
}

/// What the app has to do after a command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    /// This image decoded and is now the displayed one.
    Display {
        path: PathBuf,
        index: usize,
        image: LoadedImage,
    },
    Saved(Annotation),
    Exported { path: PathBuf, images: usize },
}

/// FIFO of pending commands.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Runs commands against a session, doing the file I/O they need.
pub struct Dispatcher {
    export_path: PathBuf,
}

impl Dispatcher {
    pub fn new(export_path: PathBuf) -> Self {
        Self { export_path }
    }

    pub fn dispatch(
        &self,
        session: &mut SessionState,
        command: Command,
    ) -> Result<Outcome, SessionError> {
        match command {
            Command::SelectFolder(None) => {
                log::debug!("Folder selection cancelled");
                Ok(Outcome::Idle)
            }
            Command::SelectFolder(Some(folder)) => {
                let files = media::list_folder(&folder)?;
                let shown = session.select_folder(folder, files)?;
                display(session, shown)
            }
            Command::SetLabel(label) => {
                session.set_label(label);
                Ok(Outcome::Idle)
            }
            Command::Select(selection) => {
                session.set_selection(selection);
                Ok(Outcome::Idle)
            }
            Command::Save => session.save_annotation().map(Outcome::Saved),
            Command::NextImage => {
                let shown = session.next_image()?;
                display(session, shown)
            }
            Command::WriteJson => {
                let sets = session.annotation_sets();
                serialization::export_json(sets, &self.export_path)?;
                log::info!(
                    "Exported {} images to {}",
                    sets.len(),
                    self.export_path.display()
                );
                Ok(Outcome::Exported {
                    path: self.export_path.clone(),
                    images: sets.len(),
                })
            }
        }
    }
}

/// Decode the located entry; only an image that decodes becomes displayed.
fn display(session: &mut SessionState, shown: Option<PathBuf>) -> Result<Outcome, SessionError> {
    let Some(path) = shown else {
        return Ok(Outcome::Idle);
    };
    let image = media::load_image(&path)?;
    session.image_displayed();
    Ok(Outcome::Display {
        path,
        index: session.current_index(),
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn folder_with(dir: &Path, names: &[&str]) -> PathBuf {
        let folder = dir.join("images");
        std::fs::create_dir(&folder).unwrap();
        for name in names {
            if media::is_image_file(name) {
                image::RgbImage::from_pixel(8, 6, image::Rgb([0, 128, 255]))
                    .save(folder.join(name))
                    .expect("write image");
            } else {
                std::fs::write(folder.join(name), b"not an image").unwrap();
            }
        }
        folder
    }

    fn run(
        dispatcher: &Dispatcher,
        session: &mut SessionState,
        queue: &mut CommandQueue,
    ) -> Vec<Result<Outcome, SessionError>> {
        let mut results = Vec::new();
        while let Some(command) = queue.pop() {
            results.push(dispatcher.dispatch(session, command));
        }
        results
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = CommandQueue::new();
        queue.push(Command::SetLabel("a".to_string()));
        queue.push(Command::Save);
        queue.push(Command::NextImage);

        assert_eq!(queue.pop(), Some(Command::SetLabel("a".to_string())));
        assert_eq!(queue.pop(), Some(Command::Save));
        assert_eq!(queue.pop(), Some(Command::NextImage));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancelled_folder_dialog() {
        let dispatcher = Dispatcher::new(PathBuf::from("unused.json"));
        let mut session = SessionState::new();

        let outcome = dispatcher
            .dispatch(&mut session, Command::SelectFolder(None))
            .unwrap();
        assert_eq!(outcome, Outcome::Idle);
        assert!(session.image_folder().is_none());
    }

    #[test]
    fn test_select_folder_displays_first_image() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let folder = folder_with(dir.path(), &["a.jpg", "b.png"]);
        let dispatcher = Dispatcher::new(dir.path().join("annotations.json"));
        let mut session = SessionState::new();

        let outcome = dispatcher
            .dispatch(&mut session, Command::SelectFolder(Some(folder.clone())))
            .unwrap();
        match outcome {
            Outcome::Display { path, index, image } => {
                assert_eq!(path, folder.join("a.jpg"));
                assert_eq!(index, 0);
                assert_eq!((image.width, image.height), (8, 6));
            }
            other => panic!("expected display, got {:?}", other),
        }
        assert_eq!(session.displayed_image(), Some("a.jpg"));
    }

    #[test]
    fn test_corrupt_image_is_not_exported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let folder = folder_with(dir.path(), &["a.jpg", "c.png"]);
        std::fs::write(folder.join("b.jpg"), b"not a jpeg").unwrap();
        let export_path = dir.path().join("annotations.json");
        let dispatcher = Dispatcher::new(export_path.clone());
        let mut session = SessionState::new();
        let mut queue = CommandQueue::new();

        queue.push(Command::SelectFolder(Some(folder)));
        queue.push(Command::NextImage);
        queue.push(Command::Select(Selection::new(0.0, 0.0, 8.0, 6.0)));
        queue.push(Command::Save);
        queue.push(Command::NextImage);
        queue.push(Command::WriteJson);

        let results = run(&dispatcher, &mut session, &mut queue);
        assert!(matches!(results[1], Err(SessionError::Decode { .. })));
        assert_eq!(session.current_index(), 2);
        assert!(matches!(results[3], Err(SessionError::UnsupportedFileType(_))));
        assert!(matches!(results[4], Ok(Outcome::Display { index: 2, .. })));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&export_path).unwrap()).unwrap();
        let names: Vec<&str> = written
            .as_array()
            .unwrap()
            .iter()
            .map(|set| set["image"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.jpg", "c.png"]);
    }

    #[test]
    fn test_annotate_two_images_and_export() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let folder = folder_with(dir.path(), &["a.jpg", "b.png"]);
        let out_dir = dir.path().join("output");
        std::fs::create_dir(&out_dir).unwrap();
        let export_path = out_dir.join("annotations.json");
        let dispatcher = Dispatcher::new(export_path.clone());
        let mut session = SessionState::new();
        let mut queue = CommandQueue::new();

        queue.push(Command::SelectFolder(Some(folder)));
        queue.push(Command::Select(Selection::new(10.4, 20.6, 50.1, 80.9)));
        queue.push(Command::SetLabel("cat".to_string()));
        queue.push(Command::Save);
        queue.push(Command::NextImage);
        queue.push(Command::WriteJson);

        let results = run(&dispatcher, &mut session, &mut queue);
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|r| r.is_ok()));
        assert!(matches!(
            results[5],
            Ok(Outcome::Exported { images: 2, .. })
        ));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&export_path).unwrap()).unwrap();
        let images = written.as_array().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0]["image"], "a.jpg");
        assert_eq!(images[0]["annotations"].as_array().unwrap().len(), 1);
        assert_eq!(images[0]["annotations"][0]["label"], "cat");
        assert_eq!(images[1]["image"], "b.png");
        assert!(images[1]["annotations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_errors_do_not_stop_the_queue() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let folder = folder_with(dir.path(), &["a.jpg"]);
        let dispatcher = Dispatcher::new(dir.path().join("missing").join("annotations.json"));
        let mut session = SessionState::new();
        let mut queue = CommandQueue::new();

        queue.push(Command::Save);
        queue.push(Command::SelectFolder(Some(folder)));
        queue.push(Command::Save);
        queue.push(Command::WriteJson);
        queue.push(Command::Select(Selection::new(0.0, 0.0, 8.0, 6.0)));
        queue.push(Command::Save);

        let results = run(&dispatcher, &mut session, &mut queue);
        assert!(matches!(results[0], Err(SessionError::NoFolderSelected)));
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(SessionError::NoPendingSelection)));
        assert!(matches!(results[3], Err(SessionError::ExportDirectoryMissing(_))));
        assert!(matches!(results[5], Ok(Outcome::Saved(_))));
        assert_eq!(session.current_annotations().len(), 1);
    }

    #[test]
    fn test_select_unreadable_folder() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let dispatcher = Dispatcher::new(dir.path().join("annotations.json"));
        let mut session = SessionState::new();

        let result = dispatcher.dispatch(
            &mut session,
            Command::SelectFolder(Some(dir.path().join("gone"))),
        );
        assert!(matches!(result, Err(SessionError::FolderRead { .. })));
        assert!(session.image_folder().is_none());
    }
}
