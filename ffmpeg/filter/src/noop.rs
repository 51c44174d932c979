/*!
    Identity filter.
*/

use ffmpeg_types::{Rational, Result, VideoFrame};

use crate::activate::{Activation, ActivationState};
use crate::filter::Filter;
use crate::link::{InputLink, OutputLink};

fn pass(frame: VideoFrame, _time_base: Rational) -> Result<VideoFrame> {
    tracing::trace!(pts = frame.pts.0, "noop");
    Ok(frame)
}

/**
    Passes every frame through unchanged, logging its timestamp.

    Useful as a reference stage when checking graph wiring.
*/
#[derive(Debug, Default)]
pub struct NoopFilter {
    activation: Activation,
}

impl NoopFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for NoopFilter {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn activate(
        &mut self,
        input: &mut dyn InputLink,
        output: &mut dyn OutputLink,
    ) -> Result<ActivationState> {
        self.activation.step(input, output, pass)
    }

    fn filter_frame(
        &mut self,
        frame: VideoFrame,
        time_base: Rational,
        output: &mut dyn OutputLink,
    ) -> Result<()> {
        self.activation.deliver(frame, time_base, output, pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Link;
    use crate::testing::{TB_1_30, gradient_frame};
    use ffmpeg_types::{LinkStatus, Pts};

    #[test]
    fn forwards_same_buffers() {
        let mut filter = NoopFilter::new();
        let mut input = Link::new(TB_1_30);
        let mut output = Link::new(TB_1_30);

        let frame = gradient_frame(4, 4, 0);
        let ptr = frame.planes[0].data.as_ptr();
        input.send(frame).unwrap();
        input.close(Pts(1));

        assert_eq!(
            filter.activate(&mut input, &mut output).unwrap(),
            ActivationState::Completed
        );
        assert_eq!(output.recv().unwrap().planes[0].data.as_ptr(), ptr);
        assert_eq!(output.status(), Some(LinkStatus::Eof { pts: Pts(1) }));
    }

    #[test]
    fn chains_after_flip() {
        use crate::config::FlipConfig;
        use crate::filter::FlipFilter;

        let mut flip = FlipFilter::init(FlipConfig::new().with_duration(1)).unwrap();
        let mut noop = NoopFilter::new();
        let mut source = Link::new(TB_1_30);
        let mut middle = Link::new(TB_1_30);
        let mut sink = Link::new(TB_1_30);

        for pts in 0..4 {
            source.send(gradient_frame(4, 4, pts * 15)).unwrap();
        }
        source.close(Pts(60));

        let mut stages: [&mut dyn Filter; 2] = [&mut flip, &mut noop];
        for _ in 0..10 {
            stages[0].activate(&mut source, &mut middle).unwrap();
            stages[1].activate(&mut middle, &mut sink).unwrap();
        }

        let pts: Vec<i64> = sink.drain().map(|f| f.pts.0).collect();
        assert_eq!(pts, vec![0, 15, 30, 45]);
        assert_eq!(sink.status(), Some(LinkStatus::Eof { pts: Pts(60) }));
        assert_eq!(sink.status_sets(), 1);
    }

    #[test]
    fn push_mode() {
        let mut filter = NoopFilter::new();
        let mut output = Link::new(TB_1_30);
        filter
            .filter_frame(gradient_frame(2, 2, 7), TB_1_30, &mut output)
            .unwrap();
        assert_eq!(output.recv().unwrap().pts, Pts(7));
        assert_eq!(filter.name(), "noop");
    }
}
