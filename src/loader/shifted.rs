use std::path::Path;

use log::debug;

use super::{FrameSource, ImageLoaderDescriptor, ImageOpener, LoaderError, LoaderKind};
use crate::sequence::{MissingViewError, TimeOriginShift, ViewId};

/// Loader for one image stack whose first frame sits at a time origin.
///
/// Setup `s` reads channel `s` of the source; time point `t` reads frame
/// `t - origin`. Views before the origin are missing and never read;
/// membership is decided from the origin, so a large origin costs nothing.
#[derive(Debug)]
pub struct TimeShiftedLoader<S> {
    source: S,
    kind: LoaderKind,
    descriptor: ImageLoaderDescriptor,
}

impl<S: FrameSource> TimeShiftedLoader<S> {
    /// Wrap an already opened source
    pub fn new(source: S, descriptor: ImageLoaderDescriptor) -> Self {
        let kind = LoaderKind::for_pixel_type(source.pixel_type());
        Self {
            source,
            kind,
            descriptor,
        }
    }

    /// Open the source named by `descriptor`
    pub fn open<O>(opener: &O, descriptor: ImageLoaderDescriptor) -> Result<Self, LoaderError>
    where
        O: ImageOpener<Source = S>,
    {
        let source = opener.open(Path::new(&descriptor.file_path))?;
        let loader = Self::new(source, descriptor);
        debug!(
            "Opened {} as {:?} loader (time origin {})",
            loader.descriptor.file_path, loader.kind, loader.descriptor.time_origin
        );
        Ok(loader)
    }

    /// Read the volume of `view`
    pub fn volume(&self, view: ViewId) -> Result<S::Volume, LoaderError> {
        if self.is_missing(view) {
            return Err(MissingViewError { view }.into());
        }

        let channel = u32::try_from(view.setup)
            .ok()
            .filter(|&c| c < self.source.channel_count())
            .ok_or(LoaderError::UnknownSetup(view.setup))?;

        let frames = self.source.frame_count();
        let frame = self
            .time_origin_shift()
            .source_frame(view.timepoint)
            .filter(|&f| f < frames)
            .ok_or(LoaderError::FrameOutOfRange {
                timepoint: view.timepoint,
                frames,
            })?;

        self.source.read_frame(channel, frame)
    }

    /// Loader picked from the source's pixel type
    pub fn kind(&self) -> LoaderKind {
        self.kind
    }

    /// Descriptor this loader was created from
    pub fn descriptor(&self) -> &ImageLoaderDescriptor {
        &self.descriptor
    }

    /// Whether `view` is a channel of the source at a time point before
    /// the origin
    pub fn is_missing(&self, view: ViewId) -> bool {
        let known_setup = u32::try_from(view.setup).is_ok_and(|c| c < self.source.channel_count());
        known_setup && self.time_origin_shift().is_before_origin(view.timepoint)
    }

    /// Shift between time points and source frames
    pub fn time_origin_shift(&self) -> TimeOriginShift {
        self.descriptor.time_origin_shift()
    }

    /// Underlying source
    pub fn source(&self) -> &S {
        &self.source
    }
}
