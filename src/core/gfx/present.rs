use crate::core::gfx::Canvas;
use log::warn;
use softbuffer::{Context, SoftBufferError, Surface};
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::window::Window;

/// Copies finished canvases onto the window through a softbuffer surface.
pub struct Presenter {
    _context: Context<Arc<Window>>,
    surface: Surface<Arc<Window>, Arc<Window>>,
    width: u32,
    height: u32,
}

impl Presenter {
    pub fn new(window: Arc<Window>) -> Result<Self, SoftBufferError> {
        let context = Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;
        let size = window.inner_size();
        let mut presenter = Self {
            _context: context,
            surface,
            width: 0,
            height: 0,
        };
        presenter.resize(size.width, size.height)?;
        Ok(presenter)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SoftBufferError> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            warn!("Ignoring surface resize to zero dimensions.");
            return Ok(());
        };
        self.surface.resize(w, h)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn present(&mut self, canvas: &Canvas) -> Result<(), SoftBufferError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let mut buffer = self.surface.buffer_mut()?;
        let (cw, ch) = canvas.size();
        if (cw, ch) == (self.width, self.height) {
            buffer.copy_from_slice(canvas.pixels());
        } else {
            // Window resized after the canvas was drawn; copy the overlap.
            buffer.fill(0);
            let w = cw.min(self.width) as usize;
            let src = canvas.pixels();
            for row in 0..ch.min(self.height) as usize {
                let dst_off = row * self.width as usize;
                let src_off = row * cw as usize;
                buffer[dst_off..dst_off + w].copy_from_slice(&src[src_off..src_off + w]);
            }
        }
        buffer.present()
    }
}
