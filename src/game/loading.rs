use core::sync::atomic::Ordering;

use log::{debug, info};

use crate::assets::{BoardImages, ImageLoader, load_board};

use super::{Folder, Game};

/// Proof that a board image load belongs to a particular game.
///
/// Issued by [`Game::choose_folder`]. A reset or a new game invalidates
/// every earlier ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u32,
    folder: Folder,
}

impl LoadTicket {
    pub(super) const fn new(generation: u32, folder: Folder) -> Self {
        Self { generation, folder }
    }

    /// Returns the folder whose images should be loaded.
    #[must_use]
    pub const fn folder(&self) -> Folder {
        self.folder
    }
}

impl Game {
    /// Returns whether a ticket still belongs to the current game.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Stores settled board images.
    ///
    /// Returns `false` and drops the images if the game was reset or
    /// restarted since the ticket was issued.
    pub fn finish_loading(&self, ticket: &LoadTicket, images: BoardImages) -> bool {
        let mut slot = self.images.lock();
        if !self.is_current(ticket) {
            drop(slot);
            debug!(
                "discarding stale images for folder {}",
                ticket.folder.get()
            );
            return false;
        }

        *slot = Some(images);
        drop(slot);
        info!("board ready for folder {}", ticket.folder.get());
        true
    }

    /// Returns whether every slot's image has settled for the current game.
    pub fn is_board_ready(&self) -> bool {
        self.images.lock().is_some()
    }

    /// Returns the settled board images, if loading has finished.
    pub fn images(&self) -> Option<BoardImages> {
        self.images.lock().clone()
    }

    /// Loads every slot's image for the ticket's folder, then stores them.
    ///
    /// Returns whether the images were kept; see [`Game::finish_loading`].
    #[expect(
        clippy::future_not_send,
        reason = "browser image loaders hold non-Send handles"
    )]
    pub async fn load_images<L: ImageLoader>(&self, ticket: LoadTicket, loader: &L) -> bool {
        let images = load_board(loader, &self.options, ticket.folder).await;
        self.finish_loading(&ticket, images)
    }

    /// Chooses a folder and loads its board images.
    ///
    /// Returns `false` if the folder was rejected or the game was reset
    /// before the images settled.
    #[expect(
        clippy::future_not_send,
        reason = "browser image loaders hold non-Send handles"
    )]
    pub async fn start<L: ImageLoader>(&self, folder: Folder, loader: &L) -> bool {
        match self.choose_folder(folder) {
            Some(ticket) => self.load_images(ticket, loader).await,
            None => false,
        }
    }
}
