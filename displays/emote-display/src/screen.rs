//! Screen buffer
//!
//! In-memory render tree for the single display. The controller attaches
//! and detaches surfaces here; a display task later renders the result
//! to any [`DisplayBackend`].

use emote_core::{Redraw, RenderTree, SurfaceId};
use heapless::String;

use crate::backend::{BitmapStore, DisplayBackend, DisplayError, Layout};

/// Maximum bytes held by the text surface
pub const TEXT_CAPACITY: usize = 64;

/// Screen state shared between controller and display task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Content of the text surface, kept while hidden
    text: String<TEXT_CAPACITY>,
    /// Surface currently attached
    attached: Option<SurfaceId>,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank screen with nothing attached
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            attached: None,
            dirty: true,
        }
    }

    /// Text surface content
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Draw the attached surface
    ///
    /// Clears first, so a blank screen results when nothing is attached.
    pub fn render<B, S>(
        &self,
        backend: &mut B,
        bitmaps: &S,
        layout: &Layout,
    ) -> Result<(), DisplayError>
    where
        B: DisplayBackend,
        S: BitmapStore + ?Sized,
    {
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        backend.clear()?;

        match self.attached {
            Some(SurfaceId::Text) => backend.draw_text(layout.text, &self.text),
            Some(SurfaceId::Image(sentiment)) => {
                let bitmap = bitmaps
                    .bitmap(sentiment.image())
                    .ok_or(DisplayError::MissingAsset)?;
                backend.draw_bitmap(bitmap)
            }
            None => Ok(()),
        }
    }
}

impl RenderTree for Screen {
    fn attach(&mut self, surface: SurfaceId) {
        self.attached = Some(surface);
        self.dirty = true;
    }

    fn detach(&mut self, surface: SurfaceId) {
        if self.attached == Some(surface) {
            self.attached = None;
            self.dirty = true;
        }
    }

    fn set_text(&mut self, text: &str) {
        if self.text == text {
            return;
        }
        self.text.clear();
        // Truncate on a char boundary if too long
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
        }
        if self.attached == Some(SurfaceId::Text) {
            self.dirty = true;
        }
    }

    fn attached(&self) -> Option<SurfaceId> {
        self.attached
    }
}

impl Redraw for Screen {
    fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Screen[{}, \"{}\", dirty={}]",
            self.attached,
            self.text.as_str(),
            self.dirty
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Bitmap, TextFrame};
    use emote_core::{ImageResource, Sentiment};
    use std::string::String as StdString;
    use std::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Text(TextFrame, StdString),
        Bitmap(usize),
    }

    struct FakeBackend {
        ready: bool,
        calls: Vec<Call>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                ready: true,
                calls: Vec::new(),
            }
        }
    }

    impl DisplayBackend for FakeBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.calls.push(Call::Clear);
            Ok(())
        }

        fn draw_text(&mut self, frame: TextFrame, text: &str) -> Result<(), DisplayError> {
            self.calls.push(Call::Text(frame, text.to_string()));
            Ok(())
        }

        fn draw_bitmap(&mut self, bitmap: Bitmap) -> Result<(), DisplayError> {
            self.calls.push(Call::Bitmap(bitmap.data.len()));
            Ok(())
        }

        fn dimensions(&self) -> (u16, u16) {
            (128, 64)
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    static SMILEY: [u8; 1] = [0xFF];
    static FROWN: [u8; 2] = [0xFF, 0x00];

    /// Store without a neutral face
    struct PartialStore;

    impl BitmapStore for PartialStore {
        fn bitmap(&self, image: ImageResource) -> Option<Bitmap> {
            match image {
                ImageResource::Smiley => Some(Bitmap::new(&SMILEY, 8)),
                ImageResource::Frown => Some(Bitmap::new(&FROWN, 8)),
                ImageResource::Neutral => None,
            }
        }
    }

    #[test]
    fn test_new_screen() {
        let mut screen = Screen::new();
        assert_eq!(screen.attached(), None);
        assert_eq!(screen.text(), "");
        assert!(screen.take_dirty());
        assert!(!screen.take_dirty());
    }

    #[test]
    fn test_attach_detach() {
        let mut screen = Screen::new();
        screen.attach(SurfaceId::Text);
        screen.take_dirty();

        screen.detach(SurfaceId::Text);
        assert_eq!(screen.attached(), None);
        assert!(screen.take_dirty());

        screen.attach(SurfaceId::Image(Sentiment::Sad));
        assert_eq!(screen.attached(), Some(SurfaceId::Image(Sentiment::Sad)));
    }

    #[test]
    fn test_detach_hidden_surface_ignored() {
        let mut screen = Screen::new();
        screen.attach(SurfaceId::Text);
        screen.take_dirty();

        screen.detach(SurfaceId::Image(Sentiment::Happy));
        assert_eq!(screen.attached(), Some(SurfaceId::Text));
        assert!(!screen.take_dirty());
    }

    #[test]
    fn test_hidden_text_change_is_clean() {
        let mut screen = Screen::new();
        screen.attach(SurfaceId::Image(Sentiment::Happy));
        screen.take_dirty();

        screen.set_text("hello");
        assert_eq!(screen.text(), "hello");
        assert!(!screen.take_dirty());

        screen.detach(SurfaceId::Image(Sentiment::Happy));
        screen.attach(SurfaceId::Text);
        screen.take_dirty();
        screen.set_text("Sent");
        assert!(screen.take_dirty());
    }

    #[test]
    fn test_text_truncated_on_char_boundary() {
        let mut screen = Screen::new();
        let mut long = "a".repeat(TEXT_CAPACITY - 1);
        long.push('é');

        screen.set_text(&long);
        assert_eq!(screen.text().len(), TEXT_CAPACITY - 1);
        assert!(screen.text().chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_render_text() {
        let mut screen = Screen::new();
        screen.set_text("Dropped");
        screen.attach(SurfaceId::Text);

        let mut backend = FakeBackend::new();
        screen.render(&mut backend, &PartialStore, &Layout::DEFAULT).unwrap();

        assert_eq!(
            backend.calls,
            [
                Call::Clear,
                Call::Text(Layout::DEFAULT.text, "Dropped".to_string())
            ]
        );
    }

    #[test]
    fn test_render_image() {
        let mut screen = Screen::new();
        screen.set_text("ignored");
        screen.attach(SurfaceId::Image(Sentiment::Sad));

        let mut backend = FakeBackend::new();
        screen.render(&mut backend, &PartialStore, &Layout::DEFAULT).unwrap();

        assert_eq!(backend.calls, [Call::Clear, Call::Bitmap(2)]);
    }

    #[test]
    fn test_render_missing_asset() {
        let mut screen = Screen::new();
        screen.attach(SurfaceId::Image(Sentiment::Neutral));

        let mut backend = FakeBackend::new();
        let result = screen.render(&mut backend, &PartialStore, &Layout::DEFAULT);

        assert_eq!(result, Err(DisplayError::MissingAsset));
    }

    #[test]
    fn test_render_not_ready() {
        let mut screen = Screen::new();
        screen.attach(SurfaceId::Text);

        let mut backend = FakeBackend::new();
        backend.ready = false;
        let result = screen.render(&mut backend, &PartialStore, &Layout::DEFAULT);

        assert_eq!(result, Err(DisplayError::NotInitialized));
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn test_render_blank() {
        let mut backend = FakeBackend::new();
        Screen::new()
            .render(&mut backend, &PartialStore, &Layout::DEFAULT)
            .unwrap();
        assert_eq!(backend.calls, [Call::Clear]);
    }

    #[test]
    fn test_driven_by_controller() {
        use emote_core::{DisplayConfig, DisplayController, TransportStatus};

        let mut controller = DisplayController::new(Screen::new(), &DisplayConfig::default());
        assert_eq!(controller.tree().attached(), Some(SurfaceId::Text));
        assert_eq!(controller.tree().text(), "Welcome");

        assert!(controller.take_dirty());
        assert!(!controller.take_dirty());
        controller.report(TransportStatus::Dropped);

        assert_eq!(controller.tree().text(), "Dropped");
        assert!(controller.take_dirty());
    }
}
