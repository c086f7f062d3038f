//! Playback status channel.
//!
//! Every play/pause toggle and every reset is announced to the host as a
//! single text line:
//!
//! ```text
//! P:<0|1> S:<index> R:<0|1>\n
//! ```
//!
//! The host side starts, pauses, or rewinds audio from these lines and
//! ignores a line identical to the previous one.

use core::fmt;

use crate::error::{Error, Result};
use crate::ui::PlaybackContext;

/// One status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    pub playing: bool,
    /// 0-based catalog index.
    pub song_index: usize,
    pub reset: bool,
}

impl StatusReport {
    pub const fn new(playing: bool, song_index: usize, reset: bool) -> Self {
        Self {
            playing,
            song_index,
            reset,
        }
    }

    /// Snapshot of the playback context.
    pub const fn from_context(ctx: &PlaybackContext) -> Self {
        Self::new(ctx.is_playing, ctx.song_index, ctx.is_reset)
    }

    /// Decode `P:<n> S:<n> R:<n>`.
    ///
    /// Surrounding whitespace is ignored; anything after the reset field is
    /// rejected. Any non-zero flag value reads as set.
    pub fn parse(line: &str) -> Result<Self> {
        let mut fields = line.trim().split(' ');
        let playing = field(fields.next(), "P:")?;
        let song_index = field(fields.next(), "S:")?;
        let reset = field(fields.next(), "R:")?;
        if fields.next().is_some() {
            return Err(Error::MalformedStatus);
        }
        Ok(Self::new(playing != 0, song_index, reset != 0))
    }
}

fn field(part: Option<&str>, tag: &str) -> Result<usize> {
    let digits = part
        .and_then(|p| p.strip_prefix(tag))
        .ok_or(Error::MalformedStatus)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedStatus);
    }
    digits.parse().map_err(|_| Error::MalformedStatus)
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P:{} S:{} R:{}",
            u8::from(self.playing),
            self.song_index,
            u8::from(self.reset)
        )
    }
}

/// Writes status lines to an outbound byte channel.
///
/// The channel is assumed always ready; a failed write is logged and
/// dropped, never retried.
pub struct StatusReporter<W> {
    out: W,
    sent: u32,
}

impl<W: fmt::Write> StatusReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, sent: 0 }
    }

    /// Log and send one status line.
    pub fn report(&mut self, status: StatusReport) {
        info!(
            "Status: playing={} song={} reset={}",
            status.playing, status.song_index, status.reset
        );
        if writeln!(self.out, "{}", status).is_err() {
            warn!("Status channel write failed");
        }
        self.sent = self.sent.wrapping_add(1);
    }

    /// Reports issued so far.
    pub fn sent(&self) -> u32 {
        self.sent
    }

    /// The underlying channel.
    pub fn channel(&self) -> &W {
        &self.out
    }

    pub fn channel_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

/// Receiver-side log of status lines with duplicate suppression.
///
/// A report equal to the previously accepted one is dropped, the same
/// way the host listener ignores a repeated command.
#[derive(Default)]
pub struct StatusLog<const N: usize> {
    reports: heapless::Vec<StatusReport, N>,
}

impl<const N: usize> StatusLog<N> {
    pub const fn new() -> Self {
        Self {
            reports: heapless::Vec::new(),
        }
    }

    /// Accept `report`. Returns `Ok(false)` when it was a duplicate.
    pub fn record(&mut self, report: StatusReport) -> Result<bool> {
        if self.reports.last() == Some(&report) {
            debug!("Duplicate status ignored");
            return Ok(false);
        }
        self.reports
            .push(report)
            .map_err(|_| Error::BufferOverflow)?;
        Ok(true)
    }

    /// Accept every status line of `text`, returning how many were new.
    ///
    /// Lines that are not status lines (volume `V:` lines, noise) are
    /// skipped and do not break the duplicate check.
    pub fn feed(&mut self, text: &str) -> Result<usize> {
        let mut accepted = 0;
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let Ok(report) = StatusReport::parse(line) else {
                debug!("Skipping non-status line");
                continue;
            };
            if self.record(report)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Accepted reports, oldest first.
    pub fn reports(&self) -> &[StatusReport] {
        &self.reports
    }

    pub fn last(&self) -> Option<&StatusReport> {
        self.reports.last()
    }
}
