//! Image intake for asset registration: filtering, decoding, and the image set.
//!
//! DESIGN
//! ======
//! Every accepted file becomes its own decode future. The futures are merged
//! through `FuturesUnordered`, so decoded images are yielded in completion
//! order, not submission order. Each result carries the position the file
//! had in the filtered batch (`index_hint`) so a caller that wants submission
//! order can restore it, but the wizard appends as results arrive.
//!
//! Non-image files are dropped before any decode starts and are never
//! reported to the user.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use std::future::Future;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::stream::{FuturesUnordered, Stream, StreamExt};

/// Minimum number of photos required before leaving the photos step.
pub const MIN_IMAGES: usize = 2;

// =============================================================================
// IMAGE SET
// =============================================================================

/// Ordered data-URI previews. Append-only except for removal by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<String>,
}

impl ImageSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn push(&mut self, data_uri: String) {
        self.images.push(data_uri);
    }

    /// Remove the image at `index`, shifting later images down by one.
    /// Out-of-range indices leave the set untouched.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    pub fn meets_minimum(&self) -> bool {
        self.images.len() >= MIN_IMAGES
    }

    pub fn as_slice(&self) -> &[String] {
        &self.images
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.images.iter()
    }
}

impl FromIterator<String> for ImageSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { images: iter.into_iter().collect() }
    }
}

// =============================================================================
// DRAG STATE
// =============================================================================

/// Cosmetic highlight state of the drop zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Inactive,
    Active,
}

/// Drag events the drop zone listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragState {
    #[must_use]
    pub fn after(self, event: DragEventKind) -> Self {
        match event {
            DragEventKind::Enter | DragEventKind::Over => Self::Active,
            DragEventKind::Leave | DragEventKind::Drop => Self::Inactive,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// A file offered to the intake, from a drop or a file picker.
pub trait ImageSource {
    /// Declared media type, e.g. `image/png`. May be empty.
    fn media_type(&self) -> String;

    /// File name as shown by the picker; only used for logging.
    fn name(&self) -> String;
}

/// An in-memory file, used by tests and by non-browser callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImageSource for IncomingFile {
    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(feature = "hydrate")]
impl ImageSource for web_sys::File {
    fn media_type(&self) -> String {
        self.type_()
    }

    fn name(&self) -> String {
        web_sys::File::name(self)
    }
}

/// One finished decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    /// Position of the source file among the accepted files of its batch.
    pub index_hint: usize,
    pub data_uri: String,
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Encode raw bytes as a self-contained `data:` URI.
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Start one decode per image file and yield results as they settle.
///
/// Non-image files are discarded up front. A decode that resolves to `None`
/// (unreadable file) is skipped.
pub fn decode_unordered<F, D, Fut>(files: Vec<F>, decode: D) -> impl Stream<Item = DecodedImage>
where
    F: ImageSource,
    D: Fn(F) -> Fut,
    Fut: Future<Output = Option<String>>,
{
    let total = files.len();
    let pending = files
        .into_iter()
        .filter(|file| {
            let keep = is_image_media_type(&file.media_type());
            if !keep {
                log::debug!("image intake: skipping non-image {}", file.name());
            }
            keep
        })
        .enumerate()
        .map(|(index_hint, file)| {
            let decoding = decode(file);
            async move { decoding.await.map(|data_uri| DecodedImage { index_hint, data_uri }) }
        })
        .collect::<FuturesUnordered<_>>();
    log::debug!("image intake: {} of {total} files accepted", pending.len());
    pending.filter_map(futures::future::ready)
}

/// Decode an in-memory file into a data URI.
pub async fn decode_incoming(file: IncomingFile) -> Option<String> {
    Some(encode_data_uri(&file.media_type, &file.bytes))
}

/// Read a browser `File` and encode it as a data URI.
#[cfg(feature = "hydrate")]
pub async fn decode_browser_file(file: web_sys::File) -> Option<String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(encode_data_uri(&file.type_(), &bytes))
}
