//! Board images and sound cues.
//!
//! Each board slot tries its folder image first, then a placeholder keyed by
//! slot and folder, and finally settles on no image at all. Every failure is
//! absorbed here; nothing in this module can fail a game transition.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::future::Future;

use futures::future::join_all;
use log::{debug, warn};

use crate::error::{AssetError, AudioError};
use crate::game::{BOARD_SIZE, Folder};
use crate::options::GameOptions;

/// Placeholder seed names, one per slot.
pub const PLACEHOLDER_IDS: [&str; BOARD_SIZE] = [
    "briefcase", "case", "box", "prize", "vault", "treasure", "reward", "bonus", "jackpot", "win",
];

/// Fetches images for the board.
///
/// Implementations resolve once the image at `url` has either loaded or
/// failed. Loads for different slots may finish in any order.
pub trait ImageLoader {
    /// Attempts to load the image at `url`.
    fn load(&self, url: &str) -> impl Future<Output = Result<(), AssetError>>;
}

/// Plays short sound effects.
pub trait AudioPlayer {
    /// Starts playing the sound at `path` without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn play(&self, path: &str) -> Result<(), AudioError>;
}

/// Where a slot's image ended up coming from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotImage {
    /// The folder's own image.
    Primary(String),
    /// The generated placeholder.
    Placeholder(String),
    /// Neither source loaded; show a plain background.
    Missing,
}

impl SlotImage {
    /// Returns the image URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Primary(url) | Self::Placeholder(url) => Some(url),
            Self::Missing => None,
        }
    }
}

/// Settled images for every slot, in board order.
pub type BoardImages = Vec<SlotImage>;

/// Returns the path of a slot's folder image, e.g. `game-assets/2/07.jpg`.
///
/// # Example
///
/// ```
/// use dondrs::{Folder, GameOptions};
/// use dondrs::assets::primary_image_path;
///
/// let folder = Folder::new(2).unwrap();
/// assert_eq!(
///     primary_image_path(&GameOptions::default(), folder, 6),
///     "game-assets/2/07.jpg"
/// );
/// ```
#[must_use]
pub fn primary_image_path(options: &GameOptions, folder: Folder, slot: usize) -> String {
    format!("{}/{}/{:02}.jpg", options.asset_root, folder.get(), slot + 1)
}

/// Returns the placeholder URL for a slot.
#[must_use]
pub fn placeholder_image_url(options: &GameOptions, folder: Folder, slot: usize) -> String {
    let id = PLACEHOLDER_IDS.get(slot).copied().unwrap_or("case");
    format!(
        "{}/{}-{}/{}/{}",
        options.placeholder_base,
        id,
        folder.get(),
        options.placeholder_width,
        options.placeholder_height
    )
}

/// Resolves one slot's image, falling back as needed.
#[expect(
    clippy::future_not_send,
    reason = "browser image loaders hold non-Send handles"
)]
pub async fn resolve_slot<L: ImageLoader>(
    loader: &L,
    options: &GameOptions,
    folder: Folder,
    slot: usize,
) -> SlotImage {
    let primary = primary_image_path(options, folder, slot);
    let primary_result = loader.load(&primary).await;
    match primary_result {
        Ok(()) => return SlotImage::Primary(primary),
        Err(err) => debug!("slot {slot}: {primary}: {err}, trying placeholder"),
    }

    let placeholder = placeholder_image_url(options, folder, slot);
    let placeholder_result = loader.load(&placeholder).await;
    match placeholder_result {
        Ok(()) => SlotImage::Placeholder(placeholder),
        Err(err) => {
            warn!("slot {slot}: no image available ({err})");
            SlotImage::Missing
        }
    }
}

/// Resolves every slot concurrently and waits for all of them to settle.
///
/// Slots may settle in any order; the result is always in board order.
#[expect(
    clippy::future_not_send,
    reason = "browser image loaders hold non-Send handles"
)]
pub async fn load_board<L: ImageLoader>(
    loader: &L,
    options: &GameOptions,
    folder: Folder,
) -> BoardImages {
    join_all((0..BOARD_SIZE).map(|slot| resolve_slot(loader, options, folder, slot))).await
}

/// A named sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The player took the deal.
    Deal,
    /// The player refused the deal.
    NoDeal,
}

impl Cue {
    /// Returns the sound's file stem.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deal => "deal",
            Self::NoDeal => "no-deal",
        }
    }

    /// Returns the sound's path under the asset root.
    #[must_use]
    pub fn path(self, options: &GameOptions) -> String {
        format!("{}/sounds/{}.mp3", options.asset_root, self.name())
    }
}

/// Plays a cue and ignores any playback failure.
pub fn play_cue<A: AudioPlayer + ?Sized>(audio: &A, options: &GameOptions, cue: Cue) {
    if let Err(err) = audio.play(&cue.path(options)) {
        warn!("could not play '{}': {err}", cue.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_uses_slot_seed() {
        let folder = Folder::new(3).unwrap();
        let options = GameOptions::default();
        assert_eq!(
            placeholder_image_url(&options, folder, 0),
            "https://picsum.photos/seed/briefcase-3/300/400"
        );
        assert_eq!(
            placeholder_image_url(&options, folder, 9),
            "https://picsum.photos/seed/win-3/300/400"
        );
    }

    #[test]
    fn cue_paths() {
        let options = GameOptions::default().with_asset_root("assets");
        assert_eq!(Cue::NoDeal.path(&options), "assets/sounds/no-deal.mp3");
        assert_eq!(Cue::Deal.path(&options), "assets/sounds/deal.mp3");
    }

    #[test]
    fn slot_image_url() {
        assert_eq!(SlotImage::Primary("a.jpg".into()).url(), Some("a.jpg"));
        assert_eq!(SlotImage::Missing.url(), None);
    }
}
