/*!
    Activation controller shared by the filter stages.

    One call to [`Activation::step`] is one non-blocking scheduling step:
    pull at most one frame, process and forward it, otherwise ask upstream
    for more, and finally propagate end of stream once the input reports it.
    The graph scheduler may call it any number of times, returning early is
    the only way a stage waits.
*/

use ffmpeg_types::{Error, Rational, Result, VideoFrame};

use crate::link::{InputLink, OutputLink};

/**
    Scheduling state of a stage.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivationState {
    /// Waiting for or processing frames.
    #[default]
    Running,
    /// Upstream has closed its link, queued frames are still being drained.
    Draining,
    /// End of stream has been propagated. Terminal.
    Completed,
}

/**
    Drives a stage's input and output links.

    Generic over the per-frame processing so that every stage shares the
    same pull, forward and end-of-stream logic.
*/
#[derive(Debug, Default)]
pub struct Activation {
    state: ActivationState,
}

impl Activation {
    /**
        Create a controller in the running state.
    */
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Current scheduling state.
    */
    pub fn state(&self) -> ActivationState {
        self.state
    }

    /**
        Returns true once end of stream has been propagated.
    */
    pub fn is_completed(&self) -> bool {
        self.state == ActivationState::Completed
    }

    /**
        Run one activation.

        A frame consumed in this call is forwarded before any end of stream
        is propagated. Errors are returned as-is without changing state,
        and calling again after completion does nothing.
    */
    pub fn step<I, O, F>(
        &mut self,
        input: &mut I,
        output: &mut O,
        process: F,
    ) -> Result<ActivationState>
    where
        I: InputLink + ?Sized,
        O: OutputLink + ?Sized,
        F: FnOnce(VideoFrame, Rational) -> Result<VideoFrame>,
    {
        if self.is_completed() {
            return Ok(self.state);
        }

        match input.try_consume()? {
            Some(frame) => forward(frame, input.time_base(), output, process)?,
            None => {
                tracing::trace!("no frame queued, requesting one");
                input.request_frame()?;
            }
        }

        if let Some(status) = input.poll_status()? {
            tracing::debug!(pts = status.pts().0, "input closed, closing output");
            output.set_status(status);
            self.state = ActivationState::Completed;
            return Ok(self.state);
        }

        self.state = if input.status_pending() {
            ActivationState::Draining
        } else {
            ActivationState::Running
        };
        Ok(self.state)
    }

    /**
        Process and forward a frame delivered eagerly by upstream.

        Frames arriving after end of stream are dropped with [`Error::Eof`].
    */
    pub fn deliver<O, F>(
        &mut self,
        frame: VideoFrame,
        time_base: Rational,
        output: &mut O,
        process: F,
    ) -> Result<()>
    where
        O: OutputLink + ?Sized,
        F: FnOnce(VideoFrame, Rational) -> Result<VideoFrame>,
    {
        if self.is_completed() {
            tracing::warn!(pts = frame.pts.0, "frame delivered after end of stream, dropping");
            return Err(Error::Eof);
        }
        forward(frame, time_base, output, process)
    }
}

fn forward<O, F>(frame: VideoFrame, time_base: Rational, output: &mut O, process: F) -> Result<()>
where
    O: OutputLink + ?Sized,
    F: FnOnce(VideoFrame, Rational) -> Result<VideoFrame>,
{
    let pts = frame.pts;
    let out = process(frame, time_base).inspect_err(|e| {
        tracing::warn!(pts = pts.0, error = %e, "failed to process frame, dropping");
    })?;
    output.push(out).inspect_err(|e| {
        tracing::warn!(pts = pts.0, error = %e, "failed to push frame downstream");
    })
}
