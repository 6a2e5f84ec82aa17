//! Startup surface (the window shown when no case is open).

/// Both operations are idempotent and run on the UI-affinity context.
///
/// After a failed creation the workflow closes the surface and reopens it
/// only if no case is open, so the user is never left without any window.
pub trait StartupSurface: Send + Sync {
    fn close(&self);

    fn open(&self);
}
