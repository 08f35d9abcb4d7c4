//! Game configuration options.
//!
//! Prize values, the round schedule and the reduced-average factor are fixed
//! constants of the format; options only cover presentation and assets.

use alloc::string::String;

use crate::input::KeyBindings;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dondrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_folders(5)
///     .with_asset_root("static/assets")
///     .with_placeholder_size(150, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of asset folders offered at the start screen (numbered from 1).
    pub folders: u8,
    /// Directory holding the image folders, overlays and `sounds/`.
    pub asset_root: String,
    /// Base URL for placeholder images.
    pub placeholder_base: String,
    /// Placeholder image width in pixels.
    pub placeholder_width: u16,
    /// Placeholder image height in pixels.
    pub placeholder_height: u16,
    /// Keyboard bindings.
    pub keys: KeyBindings,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            folders: 3,
            asset_root: String::from("game-assets"),
            placeholder_base: String::from("https://picsum.photos/seed"),
            placeholder_width: 300,
            placeholder_height: 400,
            keys: KeyBindings::default(),
        }
    }
}

impl GameOptions {
    /// Sets the number of offered asset folders.
    ///
    /// # Example
    ///
    /// ```
    /// use dondrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_folders(6);
    /// assert_eq!(options.folders, 6);
    /// ```
    #[must_use]
    pub const fn with_folders(mut self, folders: u8) -> Self {
        self.folders = folders;
        self
    }

    /// Sets the asset root directory.
    ///
    /// # Example
    ///
    /// ```
    /// use dondrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_asset_root("assets");
    /// assert_eq!(options.asset_root, "assets");
    /// ```
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<String>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Sets the placeholder image base URL.
    #[must_use]
    pub fn with_placeholder_base(mut self, base: impl Into<String>) -> Self {
        self.placeholder_base = base.into();
        self
    }

    /// Sets the placeholder image size.
    ///
    /// # Example
    ///
    /// ```
    /// use dondrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_placeholder_size(120, 160);
    /// assert_eq!(options.placeholder_width, 120);
    /// assert_eq!(options.placeholder_height, 160);
    /// ```
    #[must_use]
    pub const fn with_placeholder_size(mut self, width: u16, height: u16) -> Self {
        self.placeholder_width = width;
        self.placeholder_height = height;
        self
    }

    /// Sets the keyboard bindings.
    #[must_use]
    pub const fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }
}
