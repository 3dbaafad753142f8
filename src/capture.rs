//! Stroke capture
//!
//! Turns a source of pointer samples into a [`Path`]. Live devices are
//! polled through [`PointSource`] on a fixed interval until a stop signal
//! arrives; text input is read line by line with [`read_stroke`].

use std::io::BufRead;

use gesturekit_core::{Path, Point};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::time::Duration;
use tracing::{debug, trace};

/// Errors raised while reading strokes
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed point on line {line}: {content:?} (expected {dimensions} coordinates)")]
    MalformedPoint {
        line: usize,
        content: String,
        dimensions: usize,
    },
}

pub type CaptureResult<T> = std::result::Result<T, CaptureError>;

/// A device or script that yields pointer positions.
pub trait PointSource<const N: usize> {
    /// The current position, or `None` once the source is exhausted.
    fn sample(&mut self) -> Option<Point<N>>;
}

impl<const N: usize, F> PointSource<N> for F
where
    F: FnMut() -> Option<Point<N>>,
{
    fn sample(&mut self) -> Option<Point<N>> {
        self()
    }
}

/// Polls `source` every `interval` and collects the samples into a stroke.
///
/// Recording ends when `stop` receives a value, when its sender is dropped,
/// or when the source runs dry. The stop signal is checked before each sample.
pub async fn record_stroke<const N: usize, S>(
    source: &mut S,
    mut stop: oneshot::Receiver<()>,
    interval: Duration,
) -> Path<N>
where
    S: PointSource<N> + ?Sized,
{
    let mut path = Path::new();

    loop {
        match stop.try_recv() {
            Err(TryRecvError::Empty) => {}
            Ok(()) | Err(TryRecvError::Closed) => {
                debug!("Stop signal received after {} samples", path.len());
                break;
            }
        }

        match source.sample() {
            Some(point) => {
                trace!("Sampled {}", point);
                path.add_point(point);
            }
            None => {
                debug!("Point source exhausted after {} samples", path.len());
                break;
            }
        }

        tokio::time::sleep(interval).await;
    }

    path
}

/// Reads one stroke of `N`-coordinate lines from `reader`.
///
/// Coordinates are separated by commas or whitespace. A blank line ends the
/// stroke; lines starting with `#` are skipped. Coordinates that do not parse
/// to a finite `f32` (including `inf`, `NaN` and overflowing values such as
/// `1e39`) make the line malformed. Returns `None` when the input is
/// exhausted before any point was read.
pub fn read_stroke<const N: usize, R: BufRead>(reader: &mut R) -> CaptureResult<Option<Path<N>>> {
    let mut path = Path::new();
    let mut line = String::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        let content = line.trim();
        if content.starts_with('#') {
            continue;
        }
        if content.is_empty() {
            if path.is_empty() {
                continue;
            }
            break;
        }

        let point = parse_point(content).ok_or_else(|| CaptureError::MalformedPoint {
            line: line_number,
            content: content.to_string(),
            dimensions: N,
        })?;
        path.add_point(point);
    }

    if path.is_empty() {
        return Ok(None);
    }
    debug!("Read stroke of {} points", path.len());
    Ok(Some(path))
}

fn parse_point<const N: usize>(content: &str) -> Option<Point<N>> {
    let mut coords = [0.0f32; N];
    let mut fields = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());

    for coord in coords.iter_mut() {
        *coord = fields
            .next()?
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())?;
    }
    if fields.next().is_some() {
        return None;
    }
    Some(Point::new(coords))
}
