//! Process-wide shared display surface.
//!
//! The simulator keeps one [`PixelSurface`] alive for the duration of the
//! process, the way a panel driver owns its framebuffer. The mutex only
//! serializes access for embedding hosts; the core itself is
//! single-threaded.

use conquer_once::spin::OnceCell;
use spin::Mutex;

use crate::surface::PixelSurface;

static DISPLAY: OnceCell<Mutex<PixelSurface>> = OnceCell::uninit();

/// Initialize the shared display surface.
///
/// The first call fixes the geometry; later calls are ignored.
pub fn init(width: usize, height: usize) {
    match DISPLAY.try_init_once(|| Mutex::new(PixelSurface::new(width, height))) {
        Ok(()) => log::info!("display initialized at {}x{}", width, height),
        Err(_) => log::warn!("display already initialized, ignoring {}x{}", width, height),
    }
}

/// Run `f` against the locked display surface.
///
/// Returns `None` when [`init`] has not been called yet.
pub fn with<R>(f: impl FnOnce(&mut PixelSurface) -> R) -> Option<R> {
    let display = DISPLAY.get()?;
    Some(f(&mut display.lock()))
}
