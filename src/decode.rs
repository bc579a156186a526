//! Parallel frame decoding.
//!
//! Each demuxed JPEG slice decodes independently of its siblings, so the
//! decode stage fans out one rayon task per slice. Every task owns exactly
//! one disjoint slot in the output vector: `par_iter_mut` hands out
//! non-overlapping `&mut` references, so the output needs no locking.
//! Decode failures are collected through a bounded channel, tagged with the
//! failing frame's index, without stopping sibling tasks: one corrupt slice
//! must not silently poison frames that decode fine.
//!
//! Output ordering is positional, not temporal: `frames[i]` always
//! corresponds to `slices[i]` no matter which task finishes first.

use image::{ImageFormat, RgbImage};
use rayon::prelude::*;

use crate::error::FramesheetError;

/// Decode every JPEG slice into an RGB raster, in parallel.
///
/// Returns a vector of the same length as `slices` where index `i` holds the
/// decode of `slices[i]`.
///
/// # Errors
///
/// If any slice fails to decode, all remaining tasks still run to completion
/// and the first recorded failure is returned as
/// [`FramesheetError::DecodeFailure`] with the frame's index.
///
/// # Example
///
/// ```no_run
/// let stream: Vec<u8> = std::fs::read("frames.mjpeg")?;
/// let slices = framesheet::split_jpeg_stream(&stream);
/// let frames = framesheet::decode_frames(&slices)?;
/// assert_eq!(frames.len(), slices.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode_frames(slices: &[&[u8]]) -> Result<Vec<RgbImage>, FramesheetError> {
    if slices.is_empty() {
        return Ok(Vec::new());
    }

    log::debug!("Decoding {} frame(s) in parallel", slices.len());

    let mut slots: Vec<Option<RgbImage>> = vec![None; slices.len()];
    let (error_sender, error_receiver) = crossbeam_channel::bounded(slices.len());

    slots
        .par_iter_mut()
        .zip(slices.par_iter())
        .enumerate()
        .for_each(|(index, (slot, data))| {
            match image::load_from_memory_with_format(data, ImageFormat::Jpeg) {
                Ok(decoded) => *slot = Some(decoded.to_rgb8()),
                Err(error) => {
                    // Bounded at slices.len(), so the send cannot block.
                    let _ = error_sender.send((index, error.to_string()));
                }
            }
        });
    drop(error_sender);

    if let Ok((index, reason)) = error_receiver.try_recv() {
        return Err(FramesheetError::DecodeFailure { index, reason });
    }

    // No error recorded means every slot was written.
    let frames: Vec<RgbImage> = slots.into_iter().flatten().collect();
    debug_assert_eq!(frames.len(), slices.len());
    Ok(frames)
}
