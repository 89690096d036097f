/// Opaque handle to the serve sound. Calls are fire-and-forget;
/// last call wins.
pub trait Audio {
    fn play(&mut self);
    fn pause(&mut self);
}

/// Audio sink that does nothing. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct NullAudio;

impl Audio for NullAudio {
    fn play(&mut self) {}
    fn pause(&mut self) {}
}
