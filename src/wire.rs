//! Line-oriented textual boundary.
//!
//! Compatibility encoding for callers that exchange results as text:
//!
//! ```text
//! totalMovement|seekTimeMs|rotationalLatencyMs|transferTimeMs|totalTimeMs|c0,c1,...,cn
//! 334|33.40|33.33|4.10|70.83|50,65,67,98,122,124,183,37,14
//! ```
//!
//! Timing fields carry [`DECIMALS`] decimal places, so each decoded time is
//! within [`MAX_ROUNDING_ERROR_MS`] of the encoded value. Movement and the
//! service sequence round-trip exactly. The sequence always begins with the
//! head position and excludes boundary stops.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::BoundaryProtocolError;
use crate::models::{ScheduleResult, TimingBreakdown};

/// Decimal places used for timing fields.
pub const DECIMALS: usize = 2;

/// Largest difference between an encoded and a decoded timing field (ms).
pub const MAX_ROUNDING_ERROR_MS: f64 = 0.005;

const FIELD_COUNT: usize = 6;

/// A result as carried over the textual boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    pub total_movement: u64,
    pub timing: TimingBreakdown,
    pub sequence: Vec<u32>,
}

impl From<&ScheduleResult> for WireRecord {
    fn from(result: &ScheduleResult) -> Self {
        Self {
            total_movement: result.total_movement,
            timing: result.timing,
            sequence: result.sequence.as_slice().to_vec(),
        }
    }
}

impl fmt::Display for WireRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.timing;
        write!(
            f,
            "{}|{:.p$}|{:.p$}|{:.p$}|{:.p$}|",
            self.total_movement,
            t.seek_time_ms,
            t.rotational_latency_ms,
            t.transfer_time_ms,
            t.total_time_ms,
            p = DECIMALS
        )?;
        for (i, c) in self.sequence.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for WireRecord {
    type Err = BoundaryProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        decode(line)
    }
}

/// Encodes a result as one line (no trailing newline).
pub fn encode(result: &ScheduleResult) -> String {
    WireRecord::from(result).to_string()
}

/// Decodes one line.
///
/// # Errors
/// - [`BoundaryProtocolError::EmptyResponse`] for blank input.
/// - [`BoundaryProtocolError::FieldCount`] unless there are exactly six fields.
/// - [`BoundaryProtocolError::InvalidInteger`] / [`BoundaryProtocolError::InvalidFloat`]
///   for unparsable, negative, or non-finite values.
/// - [`BoundaryProtocolError::SequenceTooShort`] if the sequence has fewer
///   than two cylinders.
pub fn decode(line: &str) -> Result<WireRecord, BoundaryProtocolError> {
    parse_line(line).inspect_err(|e| warn!("rejected boundary response {line:?}: {e}"))
}

fn parse_line(line: &str) -> Result<WireRecord, BoundaryProtocolError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(BoundaryProtocolError::EmptyResponse);
    }

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let [movement, seek, rot, xfer, total, sequence] = fields[..] else {
        return Err(BoundaryProtocolError::FieldCount {
            found: fields.len(),
        });
    };

    let total_movement = parse_int::<u64>("totalMovement", movement)?;
    let timing = TimingBreakdown {
        seek_time_ms: parse_time("seekTimeMs", seek)?,
        rotational_latency_ms: parse_time("rotationalLatencyMs", rot)?,
        transfer_time_ms: parse_time("transferTimeMs", xfer)?,
        total_time_ms: parse_time("totalTimeMs", total)?,
    };

    let sequence = sequence
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_int::<u32>("sequence", s))
        .collect::<Result<Vec<u32>, _>>()?;
    if sequence.len() < 2 {
        return Err(BoundaryProtocolError::SequenceTooShort {
            len: sequence.len(),
        });
    }

    Ok(WireRecord {
        total_movement,
        timing,
        sequence,
    })
}

fn parse_int<T: FromStr>(field: &'static str, value: &str) -> Result<T, BoundaryProtocolError> {
    value
        .parse()
        .map_err(|_| BoundaryProtocolError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

fn parse_time(field: &'static str, value: &str) -> Result<f64, BoundaryProtocolError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(BoundaryProtocolError::InvalidFloat {
            field,
            value: value.to_string(),
        }),
    }
}
