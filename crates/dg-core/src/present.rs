//! Presentation adapter interface
//!
//! The generator never draws anything itself. It hands each finished
//! [`Dungeon`] to a [`Presenter`], which owns whatever visual artifacts it
//! creates and releases them on [`Presenter::clear`].

use thiserror::Error;

use crate::dungeon::{CellType, Dungeon};

/// Rendering errors. None of these invalidate the generated layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("No drawable asset configured for {cell} cells")]
    MissingAssets { cell: CellType },

    #[error("Render backend error: {0}")]
    Backend(String),
}

/// Consumer of finished dungeons
pub trait Presenter {
    /// Create visual artifacts for `dungeon`
    fn render(&mut self, dungeon: &Dungeon) -> Result<(), RenderError>;

    /// Release every artifact created by the last `render`
    fn clear(&mut self);
}

/// Presenter that draws nothing, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _dungeon: &Dungeon) -> Result<(), RenderError> {
        Ok(())
    }

    fn clear(&mut self) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render(&mut self, dungeon: &Dungeon) -> Result<(), RenderError> {
        (**self).render(dungeon)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn render(&mut self, dungeon: &Dungeon) -> Result<(), RenderError> {
        (**self).render(dungeon)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
