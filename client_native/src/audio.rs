use game_core::Audio;

/// Serve-sound handle. The frontend ships without an audio backend,
/// so state changes are traced to the log instead of a device.
#[derive(Debug, Default)]
pub struct ServeSound {
    playing: bool,
}

impl Audio for ServeSound {
    fn play(&mut self) {
        if !self.playing {
            log::debug!("serve sound: play");
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        if self.playing {
            log::debug!("serve sound: pause");
        }
        self.playing = false;
    }
}
