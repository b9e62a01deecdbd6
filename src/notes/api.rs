//! # API Facade
//!
//! The single entry point for note operations, whatever the UI.
//!
//! Every method is one invocation of the load, operate, save cycle:
//!
//! 1. load the full sequence from the [`StorageBackend`]
//! 2. build a [`NoteStore`] over it (rejecting malformed files)
//! 3. run exactly one command
//! 4. save, but only if the store was mutated
//!
//! If the save fails the error is returned and the command's result is dropped,
//! so a mutation that did not reach storage is never reported as done.
//!
//! The facade also normalizes inputs: ids arrive as user text and are parsed
//! here, so the store only ever sees well-formed [`NoteId`](crate::model::NoteId)s.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::index::{parse_id, parse_selectors};
use crate::store::{NoteStore, StorageBackend};
use tracing::debug;

pub struct NotesApi<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> NotesApi<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn add_note(&mut self, title: String, body: String) -> Result<CmdResult> {
        self.mutate(|store| commands::add::run(store, title, body))
    }

    pub fn delete_note(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        self.mutate(|store| commands::delete::run(store, id))
    }

    pub fn replace_body(&mut self, id: &str, body: String) -> Result<CmdResult> {
        let id = parse_id(id)?;
        self.mutate(|store| commands::update::replace(store, id, body))
    }

    pub fn append_body(&mut self, id: &str, fragment: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        self.mutate(|store| commands::update::append(store, id, fragment))
    }

    pub fn show_notes<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(ids)?;
        let store = self.open()?;
        Ok(commands::show::run(&store, &selectors))
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        let store = self.open()?;
        Ok(commands::list::run(&store))
    }

    pub fn clear_notes(&mut self) -> Result<CmdResult> {
        self.mutate(commands::clear::run)
    }

    pub fn doctor(&mut self) -> Result<CmdResult> {
        self.mutate(commands::doctor::run)
    }

    pub fn data_path(&self) -> CmdResult {
        CmdResult::default().with_data_path(self.backend.location())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn open(&self) -> Result<NoteStore> {
        NoteStore::from_notes(self.backend.load()?)
    }

    fn mutate(&mut self, op: impl FnOnce(&mut NoteStore) -> CmdResult) -> Result<CmdResult> {
        let mut store = self.open()?;
        let result = op(&mut store);
        if store.is_dirty() {
            self.backend.save(store.notes())?;
        } else {
            debug!("store unchanged, skipping save");
        }
        Ok(result)
    }
}

pub use crate::commands::{CmdMessage, MessageLevel, NoteSummary};
