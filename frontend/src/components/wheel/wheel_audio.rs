use web_sys::HtmlAudioElement;
use crate::config::get_asset_url;

const TICK_SRC: &str = "/static/audio/wheel-tick.mp3";
const WIN_SRC: &str = "/static/audio/wheel-win.mp3";

/// Sound effects for one wheel instance: a looping tick while spinning and a
/// one-shot chime on completion. Elements are created lazily on the first
/// unmuted spin and stopped when the owning widget unmounts, so playback can
/// never outlive the component.
pub struct WheelAudio {
    tick: Option<HtmlAudioElement>,
    win: Option<HtmlAudioElement>,
    muted: bool,
}

impl WheelAudio {
    pub fn new() -> Self {
        Self { tick: None, win: None, muted: true }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.stop_loop();
        }
    }

    pub fn start_loop(&mut self) {
        if self.muted {
            return;
        }
        if self.tick.is_none() {
            self.tick = match HtmlAudioElement::new_with_src(&get_asset_url(TICK_SRC)) {
                Ok(element) => {
                    element.set_loop(true);
                    Some(element)
                }
                Err(err) => {
                    log::warn!("spin sound unavailable: {:?}", err);
                    None
                }
            };
        }
        if let Some(tick) = &self.tick {
            let _ = tick.play();
        }
    }

    pub fn stop_loop(&mut self) {
        if let Some(tick) = &self.tick {
            let _ = tick.pause();
            tick.set_current_time(0.0);
        }
    }

    pub fn play_win(&mut self) {
        if self.muted {
            return;
        }
        if self.win.is_none() {
            self.win = HtmlAudioElement::new_with_src(&get_asset_url(WIN_SRC)).ok();
        }
        if let Some(win) = &self.win {
            win.set_current_time(0.0);
            let _ = win.play();
        }
    }

    /// Stop everything and drop the elements. Called from the widget's
    /// unmount cleanup.
    pub fn shutdown(&mut self) {
        self.stop_loop();
        if let Some(win) = &self.win {
            let _ = win.pause();
        }
        self.tick = None;
        self.win = None;
    }
}

impl Drop for WheelAudio {
    fn drop(&mut self) {
        self.shutdown();
    }
}
