//! JPEG stream demultiplexing.
//!
//! The frame extractor asks ffmpeg for every sampled frame in one invocation,
//! with `-f image2pipe -c:v mjpeg` producing a bare concatenation of JPEG
//! images on stdout: there is no container or length framing, only the JPEG
//! marker bytes themselves. This module recovers the individual images by
//! scanning for start-of-image/end-of-image marker pairs.
//!
//! The single-invocation design trades robustness for speed (one process
//! spawn instead of one per frame); a malformed stream surfaces downstream as
//! [`FramesheetError::IncompleteStream`](crate::FramesheetError::IncompleteStream)
//! with the producer's stderr attached.

use std::ops::Range;

/// JPEG start-of-image marker.
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// JPEG end-of-image marker.
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Scan a raw buffer for concatenated JPEG images and return their byte
/// ranges, in stream order.
///
/// Each range spans from a start-of-image marker through the matching
/// end-of-image marker, both inclusive. The scan stops at the first position
/// where no further start marker exists (end of stream) or where a start
/// marker has no following end marker (truncated trailing image). Neither
/// case is an error at this layer; callers compare the count against their
/// expectation.
///
/// For a well-formed buffer that is exactly a concatenation of images, the
/// returned ranges partition the buffer: concatenating the slices in order
/// reproduces the input byte-for-byte.
///
/// # Example
///
/// ```
/// let stream = [0xFF, 0xD8, 0x01, 0xFF, 0xD9, 0xFF, 0xD8, 0x02, 0xFF, 0xD9];
/// let ranges = framesheet::scan_jpeg_stream(&stream);
/// assert_eq!(ranges, vec![0..5, 5..10]);
/// ```
pub fn scan_jpeg_stream(buffer: &[u8]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut cursor = 0;

    while cursor < buffer.len() {
        let Some(start) = find_marker(&buffer[cursor..], JPEG_SOI) else {
            break;
        };
        let start = cursor + start;

        let Some(end) = find_marker(&buffer[start..], JPEG_EOI) else {
            // A start marker with no end marker: the trailing image was cut
            // off mid-write. Report only the complete images.
            break;
        };
        let end = start + end + JPEG_EOI.len();

        ranges.push(start..end);
        cursor = end;
    }

    ranges
}

/// Slice a buffer into individual encoded images using [`scan_jpeg_stream`].
pub fn split_jpeg_stream(buffer: &[u8]) -> Vec<&[u8]> {
    scan_jpeg_stream(buffer)
        .into_iter()
        .map(|range| &buffer[range])
        .collect()
}

/// Position of the first occurrence of a 2-byte marker, if any.
fn find_marker(haystack: &[u8], marker: [u8; 2]) -> Option<usize> {
    haystack
        .windows(marker.len())
        .position(|window| window == marker)
}

/// Strategy seam for recovering individual encoded images from a captured
/// stream.
///
/// The shipped transport is a bare MJPEG concatenation recovered by marker
/// scanning ([`MarkerDemux`]); a transport with structured framing can
/// substitute its own implementation without touching the decode or compose
/// stages.
pub trait StreamDemux {
    /// Slice the captured buffer into individually decodable images, in
    /// stream order.
    fn split<'a>(&self, buffer: &'a [u8]) -> Vec<&'a [u8]>;
}

/// Marker-scanning demuxer for bare concatenated JPEG streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerDemux;

impl StreamDemux for MarkerDemux {
    fn split<'a>(&self, buffer: &'a [u8]) -> Vec<&'a [u8]> {
        split_jpeg_stream(buffer)
    }
}
