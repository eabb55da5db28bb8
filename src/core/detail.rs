//! # Detail Resolution
//!
//! Maps a routed restaurant id onto what the detail page shows. An unknown
//! id is a terminal not-found state; there is nothing to retry.

use crate::core::directory::Directory;
use crate::core::restaurant::Restaurant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    Found(&'a Restaurant),
    NotFound(&'a str),
}

impl<'a> DetailView<'a> {
    pub fn resolve(directory: &'a Directory, id: &'a str) -> Self {
        match directory.find(id) {
            Some(restaurant) => DetailView::Found(restaurant),
            None => DetailView::NotFound(id),
        }
    }
}
