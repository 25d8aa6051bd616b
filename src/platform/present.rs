//=========================================================================
// Presenter
//=========================================================================
//
// Puts DrawList snapshots on screen through softbuffer.
//
// Architecture:
//   DrawList → Canvas::render (logical size) → blit_scaled → softbuffer
//
// The canvas never changes size; the surface follows the window's
// physical size and the blit stretches the canvas to fill it.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::num::NonZeroU32;
use std::rc::Rc;

//=== External Dependencies ===============================================

use softbuffer::{Context, SoftBufferError, Surface};
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::render::{Canvas, DrawList};

//=== PresentError ========================================================

/// Surface setup and presentation failures.
#[derive(Debug)]
pub enum PresentError {
    /// softbuffer context or surface could not be created for the window.
    Setup(SoftBufferError),

    /// Resizing, locking or presenting the surface failed.
    Frame(SoftBufferError),
}

impl std::fmt::Display for PresentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup(e) => write!(f, "Surface setup failed: {}", e),
            Self::Frame(e) => write!(f, "Frame presentation failed: {}", e),
        }
    }
}

impl std::error::Error for PresentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Setup(e) | Self::Frame(e) => Some(e),
        }
    }
}

//=== Presenter ===========================================================

/// Window surface plus the logical canvas it is fed from.
pub(crate) struct Presenter {
    window: Rc<Window>,
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    canvas: Canvas,
}

impl Presenter {
    pub(crate) fn new(
        window: Rc<Window>,
        logical_width: u32,
        logical_height: u32,
    ) -> Result<Self, PresentError> {
        let context = Context::new(window.clone()).map_err(PresentError::Setup)?;
        let surface = Surface::new(&context, window.clone()).map_err(PresentError::Setup)?;

        Ok(Self {
            window,
            _context: context,
            surface,
            canvas: Canvas::new(logical_width, logical_height),
        })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    /// Rasterises `frame` and presents it; a zero-sized window is skipped.
    pub(crate) fn present(&mut self, frame: &DrawList) -> Result<(), PresentError> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        self.surface.resize(width, height).map_err(PresentError::Frame)?;
        self.canvas.render(frame);

        let mut buffer = self.surface.buffer_mut().map_err(PresentError::Frame)?;
        self.canvas.blit_scaled(&mut buffer, size.width, size.height);
        buffer.present().map_err(PresentError::Frame)
    }
}
