pub mod renderer;
pub mod round_view;

pub use renderer::Renderer;
pub use round_view::Presentable;

use crate::session::FeedbackCue;

/// Banner text standing in for the sound a cue would play
pub fn cue_message(cue: FeedbackCue) -> &'static str {
    match cue {
        FeedbackCue::Correct => "Great job!",
        FeedbackCue::Wrong => "Oops! Try the next one.",
        FeedbackCue::SessionSuccess => "Amazing! You're a superstar!",
        FeedbackCue::SessionFail => "Good try! Let's play again soon.",
    }
}
