/*!
    Filter lifecycle and the flip filter.
*/

use ffmpeg_types::{Rational, Result, VideoFrame};

use crate::activate::{Activation, ActivationState};
use crate::config::FlipConfig;
use crate::flip;
use crate::link::{InputLink, OutputLink};

/**
    Hooks a graph scheduler drives a filter stage through.

    A stage is built by its own constructor (the init hook), then either
    pulled with [`Filter::activate`] or fed with [`Filter::filter_frame`],
    and finally torn down with [`Filter::uninit`]. Stages never block and
    never keep frames between calls.
*/
pub trait Filter {
    /**
        Short name of the filter, as used in graph descriptions.
    */
    fn name(&self) -> &'static str;

    /**
        Run one non-blocking scheduling step against the stage's links.
    */
    fn activate(
        &mut self,
        input: &mut dyn InputLink,
        output: &mut dyn OutputLink,
    ) -> Result<ActivationState>;

    /**
        Handle a frame pushed eagerly by upstream.
    */
    fn filter_frame(
        &mut self,
        frame: VideoFrame,
        time_base: Rational,
        output: &mut dyn OutputLink,
    ) -> Result<()>;

    /**
        Release stage resources. Safe to call at any point between activations.
    */
    fn uninit(&mut self) {}
}

/**
    Mirrors frames vertically for the first `duration` seconds of a stream,
    then passes them through unchanged.
*/
#[derive(Debug)]
pub struct FlipFilter {
    config: FlipConfig,
    activation: Activation,
}

impl FlipFilter {
    /**
        Create a flip filter, rejecting an out of range duration.
    */
    pub fn init(config: FlipConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(duration = config.duration, "flip filter initialized");
        Ok(Self {
            config,
            activation: Activation::new(),
        })
    }

    /**
        Create a flip filter from a filter-graph option string,
        such as `"duration=2"`.
    */
    pub fn from_options(options: &str) -> Result<Self> {
        Self::init(options.parse()?)
    }

    /**
        Length of the flip window in seconds.
    */
    pub fn duration(&self) -> i64 {
        self.config.duration
    }

    /**
        Current scheduling state.
    */
    pub fn state(&self) -> ActivationState {
        self.activation.state()
    }
}

impl Filter for FlipFilter {
    fn name(&self) -> &'static str {
        "flip"
    }

    fn activate(
        &mut self,
        input: &mut dyn InputLink,
        output: &mut dyn OutputLink,
    ) -> Result<ActivationState> {
        let duration = self.config.duration;
        self.activation
            .step(input, output, |frame, time_base| {
                flip::transform(frame, duration, time_base)
            })
    }

    fn filter_frame(
        &mut self,
        frame: VideoFrame,
        time_base: Rational,
        output: &mut dyn OutputLink,
    ) -> Result<()> {
        let duration = self.config.duration;
        self.activation
            .deliver(frame, time_base, output, |frame, time_base| {
                flip::transform(frame, duration, time_base)
            })
    }

    fn uninit(&mut self) {
        tracing::debug!(state = ?self.activation.state(), "flip filter uninit");
    }
}

static_assertions::assert_impl_all!(FlipFilter: Send, Sync, Filter);
