/*!
    Frame filter stages for the ffmpeg crate ecosystem.

    A filter stage sits between two links of a media graph. The graph
    scheduler drives it one non-blocking step at a time; the stage pulls
    a frame from its input link, processes it, pushes the result to its
    output link, and propagates end of stream once upstream is done.

    # Flip Filter

    ```ignore
    use ffmpeg_filter::{ActivationState, Filter, FlipConfig, FlipFilter, Link};
    use ffmpeg_types::{Pts, Rational};

    // Mirror the first two seconds of a 30 fps stream
    let mut filter = FlipFilter::init(FlipConfig::new().with_duration(2))?;

    let time_base = Rational::new(1, 30);
    let mut input = Link::new(time_base);
    let mut output = Link::new(time_base);

    for frame in decoded_frames {
        input.send(frame)?;
    }
    input.close(Pts(300));

    // The scheduler calls activate until the stage completes
    while filter.activate(&mut input, &mut output)? != ActivationState::Completed {}
    ```

    The same filter can be built from a graph option string:

    ```ignore
    let filter = FlipFilter::from_options("duration=2")?;
    ```

    # Pull and Push

    [`Filter::activate`] is the pull-style entry point, the stage takes at
    most one frame per call and asks upstream for more when its input is
    empty. [`Filter::filter_frame`] is the push-style entry point used when
    upstream delivers frames eagerly. Both go through the same
    [`Activation`] controller, so frame processing is written once.

    # Ownership

    Frames are moved through the graph, never shared. A frame handed to a
    stage is either forwarded, or dropped when processing or pushing it
    fails. Pass-through frames keep their original buffers.
*/

pub use ffmpeg_types::{Error, LinkStatus, PixelFormat, Pts, Rational, Result, VideoFrame};

mod activate;
mod config;
mod filter;
mod flip;
mod link;
mod noop;

#[cfg(test)]
mod testing;

pub use activate::{Activation, ActivationState};
pub use config::FlipConfig;
pub use filter::{Filter, FlipFilter};
pub use flip::{mirror, transform};
pub use link::{InputLink, Link, OutputLink};
pub use noop::NoopFilter;
