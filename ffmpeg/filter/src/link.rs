/*!
    Link contract between filter stages, and an in-memory link.
*/

use std::collections::VecDeque;

use ffmpeg_types::{Error, LinkStatus, Pts, Rational, Result, VideoFrame};

/**
    The consuming end of a link, as seen by the stage it feeds.

    Every method returns promptly, nothing here may block.
*/
pub trait InputLink {
    /**
        Time base of the timestamps carried on this link.
    */
    fn time_base(&self) -> Rational;

    /**
        Take the next frame, if one is queued.
    */
    fn try_consume(&mut self) -> Result<Option<VideoFrame>>;

    /**
        Ask upstream to produce a frame for a later activation.

        Advisory, and a no-op if a request is already pending.
    */
    fn request_frame(&mut self) -> Result<()>;

    /**
        Returns the terminal status of the link, once every frame
        queued before it has been consumed.
    */
    fn poll_status(&mut self) -> Result<Option<LinkStatus>>;

    /**
        Returns true if upstream has closed the link but frames remain queued.
    */
    fn status_pending(&self) -> bool {
        false
    }
}

/**
    The producing end of a link, as seen by the stage writing to it.
*/
pub trait OutputLink {
    /**
        Hand a frame downstream. Ownership passes to the link,
        including on failure.
    */
    fn push(&mut self, frame: VideoFrame) -> Result<()>;

    /**
        Close the link with a terminal status.
    */
    fn set_status(&mut self, status: LinkStatus);
}

/**
    An in-memory FIFO link.

    Implements both ends: a stage consumes from it through [`InputLink`]
    and writes to it through [`OutputLink`]. Sources feed it with
    [`Link::send`] and [`Link::close`], sinks drain it with [`Link::recv`].

    The terminal status is only reported once the queue is empty, so a
    consumer never sees end of stream ahead of a frame.
*/
#[derive(Debug)]
pub struct Link {
    time_base: Rational,
    queue: VecDeque<VideoFrame>,
    status: Option<LinkStatus>,
    frame_wanted: bool,
    requests: usize,
    status_sets: usize,
    frames_sent: usize,
}

impl Link {
    /**
        Create an open, empty link.
    */
    pub fn new(time_base: Rational) -> Self {
        Self {
            time_base,
            queue: VecDeque::new(),
            status: None,
            frame_wanted: false,
            requests: 0,
            status_sets: 0,
            frames_sent: 0,
        }
    }

    /**
        Queue a frame. Fails with [`Error::Eof`] once the link is closed.
    */
    pub fn send(&mut self, frame: VideoFrame) -> Result<()> {
        if self.status.is_some() {
            return Err(Error::Eof);
        }
        self.frame_wanted = false;
        self.frames_sent += 1;
        self.queue.push_back(frame);
        Ok(())
    }

    /**
        Close the link with end of stream at `pts`.
    */
    pub fn close(&mut self, pts: Pts) {
        self.set_status(LinkStatus::Eof { pts });
    }

    /**
        Take the next queued frame from the sink side.
    */
    pub fn recv(&mut self) -> Option<VideoFrame> {
        self.queue.pop_front()
    }

    /**
        Take every queued frame from the sink side.
    */
    pub fn drain(&mut self) -> impl Iterator<Item = VideoFrame> + '_ {
        self.queue.drain(..)
    }

    /**
        Number of queued frames.
    */
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /**
        Returns true if no frames are queued.
    */
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /**
        The status set on this link, regardless of queued frames.
    */
    pub fn status(&self) -> Option<LinkStatus> {
        self.status
    }

    /**
        Returns true if a production request is outstanding.
    */
    pub fn frame_wanted(&self) -> bool {
        self.frame_wanted
    }

    /**
        Number of production requests raised so far.
    */
    pub fn requests(&self) -> usize {
        self.requests
    }

    /**
        Number of times a status was set, including ignored repeats.
    */
    pub fn status_sets(&self) -> usize {
        self.status_sets
    }

    /**
        Number of frames ever queued on this link.
    */
    pub fn frames_sent(&self) -> usize {
        self.frames_sent
    }
}

impl InputLink for Link {
    fn time_base(&self) -> Rational {
        self.time_base
    }

    fn try_consume(&mut self) -> Result<Option<VideoFrame>> {
        Ok(self.queue.pop_front())
    }

    fn request_frame(&mut self) -> Result<()> {
        if self.status.is_none() && !self.frame_wanted {
            self.frame_wanted = true;
            self.requests += 1;
        }
        Ok(())
    }

    fn poll_status(&mut self) -> Result<Option<LinkStatus>> {
        if self.queue.is_empty() {
            Ok(self.status)
        } else {
            Ok(None)
        }
    }

    fn status_pending(&self) -> bool {
        self.status.is_some() && !self.queue.is_empty()
    }
}

impl OutputLink for Link {
    fn push(&mut self, frame: VideoFrame) -> Result<()> {
        self.send(frame)
    }

    fn set_status(&mut self, status: LinkStatus) {
        self.status_sets += 1;
        // first status wins
        if self.status.is_none() {
            self.status = Some(status);
            self.frame_wanted = false;
        }
    }
}

static_assertions::assert_impl_all!(Link: Send, Sync);
